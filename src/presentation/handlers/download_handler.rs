// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, warn};

use crate::{
    domain::models::artifact::ArtifactKind,
    infrastructure::storage::{LocalStorage, StorageError},
};

/// 以附件形式返回导出文件
pub async fn download(
    Extension(storage): Extension<Arc<LocalStorage>>,
    Path(name): Path<String>,
) -> Response {
    match storage.get(&name).await {
        Ok(Some(bytes)) => {
            let kind = ArtifactKind::from_filename(&name);
            let headers = [
                (header::CONTENT_TYPE, kind.content_type().to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!(
                        "attachment; filename*=UTF-8''{}",
                        urlencoding::encode(&name)
                    ),
                ),
            ];
            (headers, bytes).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "File not found").into_response(),
        Err(StorageError::InvalidName(name)) => {
            warn!("Rejected download name {:?}", name);
            (StatusCode::BAD_REQUEST, "Invalid file name").into_response()
        }
        Err(e) => {
            error!("Failed to read {}: {}", name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response()
        }
    }
}
