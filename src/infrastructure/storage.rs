// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::domain::models::artifact::{ArchiveError, ExportArtifact};

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("打包失败: {0}")]
    Archive(#[from] ArchiveError),

    #[error("无效的文件名: {0}")]
    InvalidName(String),
}

/// 本地文件系统存储实现
///
/// 所有导出文件平铺在同一个临时目录中，同名文件直接覆盖
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// 把文件名解析为目录内的路径，拒绝任何带目录成分的名字
    fn get_full_path(&self, name: &str) -> Result<PathBuf, StorageError> {
        let is_plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\'])
            && !name.contains('\0');
        if !is_plain {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.base_path.join(name))
    }

    /// 写入导出产物，返回文件路径
    pub async fn save(&self, artifact: &ExportArtifact) -> Result<PathBuf, StorageError> {
        let full_path = self.get_full_path(artifact.name())?;

        fs::create_dir_all(&self.base_path).await?;

        let mut file = fs::File::create(&full_path).await?;
        file.write_all(artifact.bytes()).await?;
        file.flush().await?;

        debug!("Saved {} ({} bytes)", full_path.display(), artifact.bytes().len());
        Ok(full_path)
    }

    /// 写入 UTF-8 Markdown 文本
    pub async fn save_markdown(&self, name: &str, text: &str) -> Result<PathBuf, StorageError> {
        self.save(&ExportArtifact::markdown(name, text)).await
    }

    /// 把若干文件打包为 ZIP，包内只保留文件名
    pub async fn bundle(
        &self,
        paths: &[PathBuf],
        archive_name: &str,
    ) -> Result<PathBuf, StorageError> {
        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .ok_or_else(|| StorageError::InvalidName(path.display().to_string()))?;
            let data = fs::read(path).await?;
            entries.push((name, data));
        }

        let archive = ExportArtifact::archive(
            archive_name,
            entries
                .iter()
                .map(|(name, data)| (name.as_str(), data.as_slice())),
        )?;
        self.save(&archive).await
    }

    /// 读取导出文件，不存在时返回 `None`
    pub async fn get(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let full_path = self.get_full_path(name)?;

        match fs::read(&full_path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}
