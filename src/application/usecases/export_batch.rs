// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::models::article::Article;
use crate::domain::models::artifact::{ExportArtifact, ARCHIVE_FILENAME};
use crate::domain::models::batch::BatchReport;
use crate::infrastructure::storage::{LocalStorage, StorageError};

/// 已写入存储的文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedFile {
    pub name: String,
    #[serde(skip)]
    pub path: PathBuf,
}

/// 一次批量导出的全部产物
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportBundle {
    /// 单篇文件，按输入顺序，同名只出现一次
    pub files: Vec<ExportedFile>,
    /// 合并文件
    pub combined: Option<ExportedFile>,
    /// ZIP 压缩包
    pub archive: Option<ExportedFile>,
    /// 写入失败而跳过的文件名
    pub skipped: Vec<String>,
}

impl ExportBundle {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.combined.is_none() && self.archive.is_none()
    }
}

/// 导出用例
///
/// 决定批量结果要生成哪些文件，并写入存储
pub struct ExportUseCase {
    storage: Arc<LocalStorage>,
}

impl ExportUseCase {
    pub fn new(storage: Arc<LocalStorage>) -> Self {
        Self { storage }
    }

    /// 导出单篇文章
    pub async fn export_article(
        &self,
        filename: &str,
        article: &Article,
    ) -> Result<ExportedFile, StorageError> {
        let path = self.storage.save_markdown(filename, &article.markdown).await?;
        Ok(ExportedFile {
            name: filename.to_string(),
            path,
        })
    }

    /// 导出批量结果
    ///
    /// 没有成功项时不生成任何文件。单篇写入失败只跳过该篇，
    /// 合并文件仍包含全部成功的文章
    pub async fn export_batch(&self, report: &BatchReport) -> Result<ExportBundle, StorageError> {
        if report.successes().next().is_none() {
            return Ok(ExportBundle::default());
        }

        let mut bundle = ExportBundle::default();
        let mut seen = HashSet::new();

        for (article, filename) in report.successes() {
            match self.export_article(filename, article).await {
                Ok(exported) => {
                    if seen.insert(exported.name.clone()) {
                        bundle.files.push(exported);
                    }
                }
                Err(e) => {
                    warn!("Skipping {}: {}", filename, e);
                    bundle.skipped.push(filename.to_string());
                }
            }
        }

        let combined = ExportArtifact::combined(
            report.successes().map(|(article, _)| article.markdown.as_str()),
        );
        let combined_path = self.storage.save(&combined).await?;
        bundle.combined = Some(ExportedFile {
            name: combined.name().to_string(),
            path: combined_path,
        });

        if !bundle.files.is_empty() {
            let paths: Vec<PathBuf> = bundle.files.iter().map(|f| f.path.clone()).collect();
            let archive_path = self.storage.bundle(&paths, ARCHIVE_FILENAME).await?;
            bundle.archive = Some(ExportedFile {
                name: ARCHIVE_FILENAME.to_string(),
                path: archive_path,
            });
        }

        info!(
            "Exported {} files, combined file and archive to {}",
            bundle.files.len(),
            self.storage.base_path().display()
        );
        Ok(bundle)
    }
}
