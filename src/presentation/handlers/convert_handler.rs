// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Form, Query},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

use crate::{
    application::usecases::export_batch::{ExportUseCase, ExportedFile},
    domain::{
        models::{article::Article, batch::ItemOutcome},
        services::extraction_service::ExtractionService,
    },
    presentation::{
        theme::ZenTheme,
        views::{self, BatchView, PageView, SingleView},
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub tab: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConvertForm {
    #[serde(default)]
    pub url: String,
}

/// 单URL转换的结果及其导出文件
pub(crate) struct SingleConversion {
    pub outcome: ItemOutcome,
    pub exported: Option<ExportedFile>,
    /// 导出失败的提示，转换本身仍算成功
    pub export_error: Option<String>,
}

/// 转换单个URL，成功时写入导出目录
pub(crate) async fn convert_and_export(
    extractor: &ExtractionService,
    exporter: &ExportUseCase,
    url: &str,
) -> SingleConversion {
    let outcome = extractor.process_url(url).await;

    let mut conversion = SingleConversion {
        outcome,
        exported: None,
        export_error: None,
    };

    if let Some((article, filename)) = converted(&conversion.outcome) {
        match exporter.export_article(filename, article).await {
            Ok(file) => conversion.exported = Some(file),
            Err(e) => {
                warn!("Failed to save {}: {}", filename, e);
                conversion.export_error = Some(format!("ファイルの保存に失敗しました: {}", e));
            }
        }
    }

    conversion
}

fn converted(outcome: &ItemOutcome) -> Option<(&Article, &str)> {
    match outcome {
        ItemOutcome::Converted { article, filename } => Some((article, filename.as_str())),
        _ => None,
    }
}

pub async fn index(
    Extension(theme): Extension<Arc<ZenTheme>>,
    Query(query): Query<IndexQuery>,
) -> Html<String> {
    let view = match query.tab.as_deref() {
        Some("batch") => PageView::Batch(BatchView::default()),
        _ => PageView::Single(SingleView {
            url: query.url.unwrap_or_default(),
            ..SingleView::default()
        }),
    };
    Html(views::render_page(&theme, &view))
}

pub async fn convert(
    Extension(extractor): Extension<Arc<ExtractionService>>,
    Extension(exporter): Extension<Arc<ExportUseCase>>,
    Extension(theme): Extension<Arc<ZenTheme>>,
    Form(form): Form<ConvertForm>,
) -> Html<String> {
    let conversion = convert_and_export(&extractor, &exporter, &form.url).await;

    let output = match &conversion.outcome {
        ItemOutcome::Converted { article, .. } => article.markdown.clone(),
        ItemOutcome::Rejected(e) => e.to_string(),
        ItemOutcome::Failed(e) => e.to_string(),
    };

    let view = PageView::Single(SingleView {
        url: form.url,
        output,
        download: conversion.exported.map(|file| file.name),
        notice: conversion.export_error,
    });
    Html(views::render_page(&theme, &view))
}
