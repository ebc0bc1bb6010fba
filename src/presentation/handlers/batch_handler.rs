// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Form},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    application::usecases::export_batch::{ExportBundle, ExportUseCase},
    config::settings::Settings,
    domain::{models::batch::BatchReport, services::batch_service::BatchService},
    presentation::{
        theme::ZenTheme,
        views::{self, BatchView, PageView},
    },
    utils::validators::ValidationError,
};

#[derive(Debug, Deserialize)]
pub struct BatchForm {
    #[serde(default)]
    pub urls: String,
}

/// 处理批次并导出，导出失败只记录提示
pub(crate) async fn process_and_export(
    batch: &BatchService,
    exporter: &ExportUseCase,
    input: &str,
) -> Result<(BatchReport, ExportBundle, Option<String>), ValidationError> {
    let report = batch
        .process(input, |progress| {
            debug!(
                "Batch progress {:.0}%: {}",
                progress.fraction() * 100.0,
                progress.message
            );
        })
        .await?;

    let (bundle, notice) = match exporter.export_batch(&report).await {
        Ok(bundle) if bundle.skipped.is_empty() => (bundle, None),
        Ok(bundle) => {
            let notice = format!(
                "一部のファイルを保存できませんでした: {}",
                bundle.skipped.join(", ")
            );
            (bundle, Some(notice))
        }
        Err(e) => {
            warn!("Failed to export batch results: {}", e);
            (
                ExportBundle::default(),
                Some(format!("ファイルの保存に失敗しました: {}", e)),
            )
        }
    };

    Ok((report, bundle, notice))
}

pub async fn batch(
    Extension(batch): Extension<Arc<BatchService>>,
    Extension(exporter): Extension<Arc<ExportUseCase>>,
    Extension(settings): Extension<Arc<Settings>>,
    Extension(theme): Extension<Arc<ZenTheme>>,
    Form(form): Form<BatchForm>,
) -> Html<String> {
    let view = match process_and_export(&batch, &exporter, &form.urls).await {
        Ok((report, bundle, notice)) => {
            let limit = settings.export.max_download_links;
            let downloads: Vec<String> = bundle
                .files
                .iter()
                .take(limit)
                .map(|file| file.name.clone())
                .collect();

            BatchView {
                urls: form.urls,
                report: report.render(),
                hidden_downloads: bundle.files.len() - downloads.len(),
                downloads,
                combined: bundle.combined.map(|file| file.name),
                archive: bundle.archive.map(|file| file.name),
                notice,
            }
        }
        Err(e) => BatchView {
            urls: form.urls,
            report: e.to_string(),
            ..BatchView::default()
        },
    };

    Html(views::render_page(&theme, &PageView::Batch(view)))
}
