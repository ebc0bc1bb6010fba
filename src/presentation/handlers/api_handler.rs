// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::{
    application::{
        dto::{
            batch_request::{BatchDownloadsDto, BatchItemDto, BatchRequestDto, BatchResponseDto},
            convert_request::{ConvertRequestDto, ConvertResponseDto},
        },
        usecases::export_batch::ExportUseCase,
    },
    domain::{
        models::batch::{BatchItem, ItemOutcome},
        services::{batch_service::BatchService, extraction_service::ExtractionService},
    },
    presentation::{
        errors::AppError,
        handlers::{batch_handler, convert_handler},
        views::download_href,
    },
};

/// JSON 单URL转换
///
/// 输入校验失败返回 400，提取失败以 `success: false` 返回
pub async fn convert(
    Extension(extractor): Extension<Arc<ExtractionService>>,
    Extension(exporter): Extension<Arc<ExportUseCase>>,
    Json(payload): Json<ConvertRequestDto>,
) -> Result<Json<ConvertResponseDto>, AppError> {
    let url = payload.url.trim().to_string();
    let conversion = convert_handler::convert_and_export(&extractor, &exporter, &url).await;

    let response = match conversion.outcome {
        ItemOutcome::Rejected(e) => return Err(e.into()),
        ItemOutcome::Failed(e) => ConvertResponseDto {
            success: false,
            url,
            title: None,
            markdown: None,
            char_count: None,
            filename: None,
            download_url: None,
            error: Some(e.to_string()),
        },
        ItemOutcome::Converted { article, filename } => ConvertResponseDto {
            success: true,
            url,
            title: Some(article.title.clone()),
            char_count: Some(article.char_count()),
            markdown: Some(article.markdown),
            download_url: conversion.exported.map(|file| download_href(&file.name)),
            filename: Some(filename),
            error: conversion.export_error,
        },
    };

    Ok(Json(response))
}

/// JSON 批量转换
pub async fn batch(
    Extension(batch): Extension<Arc<BatchService>>,
    Extension(exporter): Extension<Arc<ExportUseCase>>,
    Json(payload): Json<BatchRequestDto>,
) -> Result<Json<BatchResponseDto>, AppError> {
    let input = payload.urls.join("\n");
    let (report, bundle, notice) =
        batch_handler::process_and_export(&batch, &exporter, &input).await?;

    let summary = report.summary();
    let downloads = BatchDownloadsDto {
        files: bundle
            .files
            .iter()
            .map(|file| download_href(&file.name))
            .collect(),
        combined: bundle.combined.as_ref().map(|file| download_href(&file.name)),
        archive: bundle.archive.as_ref().map(|file| download_href(&file.name)),
    };

    Ok(Json(BatchResponseDto {
        total: summary.total,
        success: summary.success,
        failure: summary.failure,
        items: report.items().iter().map(item_dto).collect(),
        report: report.render(),
        downloads,
        export_error: notice,
    }))
}

fn item_dto(item: &BatchItem) -> BatchItemDto {
    let converted = item.converted();
    BatchItemDto {
        url: item.url.clone(),
        success: item.is_success(),
        title: converted.map(|(article, _)| article.title.clone()),
        char_count: converted.map(|(article, _)| article.char_count()),
        filename: converted.map(|(_, filename)| filename.to_string()),
        error: item.error_message(),
    }
}
