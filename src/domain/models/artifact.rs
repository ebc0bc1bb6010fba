// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::path::Path;

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// 合并文件的文件名
pub const COMBINED_FILENAME: &str = "wikipedia_articles_combined.md";
/// 压缩包的文件名
pub const ARCHIVE_FILENAME: &str = "wikipedia_articles.zip";
/// 合并文件中文章之间的分隔符
pub const COMBINED_SEPARATOR: &str = "\n\n---\n\n";

/// 打包错误类型
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("ZIP错误: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("没有可打包的文件")]
    Empty,
}

/// 导出产物类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// 单篇 Markdown
    Markdown,
    /// 所有成功文章的合并 Markdown
    Combined,
    /// ZIP 压缩包
    Archive,
}

impl ArtifactKind {
    pub fn content_type(&self) -> &'static str {
        match self {
            ArtifactKind::Markdown | ArtifactKind::Combined => "text/markdown; charset=utf-8",
            ArtifactKind::Archive => "application/zip",
        }
    }

    /// 根据文件名推断类型
    pub fn from_filename(name: &str) -> Self {
        if name.ends_with(".zip") {
            ArtifactKind::Archive
        } else if name == COMBINED_FILENAME {
            ArtifactKind::Combined
        } else {
            ArtifactKind::Markdown
        }
    }
}

/// 导出产物
///
/// 创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    name: String,
    kind: ArtifactKind,
    bytes: Vec<u8>,
}

impl ExportArtifact {
    /// 单篇 Markdown 文件（UTF-8）
    pub fn markdown(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            kind: ArtifactKind::Markdown,
            bytes: text.as_bytes().to_vec(),
        }
    }

    /// 把多篇文章按顺序合并成一个文件
    pub fn combined<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let joined = texts.into_iter().collect::<Vec<_>>().join(COMBINED_SEPARATOR);
        Self {
            name: COMBINED_FILENAME.to_string(),
            kind: ArtifactKind::Combined,
            bytes: joined.into_bytes(),
        }
    }

    /// 用 deflate 压缩打包多个文件
    ///
    /// 条目名只保留文件名部分；重名时保留第一个
    pub fn archive<'a, I>(name: impl Into<String>, entries: I) -> Result<Self, ArchiveError>
    where
        I: IntoIterator<Item = (&'a str, &'a [u8])>,
    {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let mut seen = HashSet::new();

        for (entry_name, data) in entries {
            let base_name = base_name(entry_name);
            if !seen.insert(base_name.clone()) {
                continue;
            }
            writer.start_file(base_name.as_str(), options)?;
            writer.write_all(data)?;
        }

        if seen.is_empty() {
            return Err(ArchiveError::Empty);
        }

        let bytes = writer.finish()?.into_inner();
        Ok(Self {
            name: name.into(),
            kind: ArtifactKind::Archive,
            bytes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

fn base_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| name.to_string())
}
