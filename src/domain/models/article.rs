// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use crate::utils::errors::ExtractError;

/// 页面没有 `firstHeading` 时使用的标题
pub const PLACEHOLDER_TITLE: &str = "Wikipedia ページ";

/// 转换完成的文章
///
/// `markdown` 总是以 `# {title}\n\n` 开头，后面是清理过的正文
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// 页面标题
    pub title: String,
    /// 最终的 Markdown 文本
    pub markdown: String,
}

impl Article {
    /// 由标题和清理后的正文组成文章
    pub fn compose(title: impl Into<String>, body: &str) -> Self {
        let title = title.into();
        let markdown = format!("# {}\n\n{}", title, body.trim());
        Self { title, markdown }
    }

    /// Markdown 文本的字符数（按 Unicode 标量计）
    pub fn char_count(&self) -> usize {
        self.markdown.chars().count()
    }
}

/// 单次提取的结果
pub type ExtractionResult = Result<Article, ExtractError>;
