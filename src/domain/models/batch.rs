// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt::Write as _;

use crate::domain::models::article::Article;
use crate::utils::errors::ExtractError;
use crate::utils::validators::ValidationError;

/// 单个URL的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// 转换成功
    Converted {
        article: Article,
        /// 建议的下载文件名
        filename: String,
    },
    /// 输入校验失败，未发起请求
    Rejected(ValidationError),
    /// 提取失败
    Failed(ExtractError),
}

/// 批量处理中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub url: String,
    pub outcome: ItemOutcome,
}

impl BatchItem {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ItemOutcome::Converted { .. })
    }

    /// 成功时的文章和文件名
    pub fn converted(&self) -> Option<(&Article, &str)> {
        match &self.outcome {
            ItemOutcome::Converted { article, filename } => Some((article, filename.as_str())),
            _ => None,
        }
    }

    /// 失败原因，成功时为 `None`
    pub fn error_message(&self) -> Option<String> {
        match &self.outcome {
            ItemOutcome::Converted { .. } => None,
            ItemOutcome::Rejected(err) => Some(err.to_string()),
            ItemOutcome::Failed(err) => Some(err.to_string()),
        }
    }
}

/// 批量处理汇总
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub success: usize,
    pub failure: usize,
}

/// 批量处理进度
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchProgress {
    /// 已处理的数量（从 1 开始）
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl BatchProgress {
    /// 完成比例，范围 0.0 - 1.0
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        self.current as f32 / self.total as f32
    }
}

/// 批量处理报告
///
/// 条目顺序与输入顺序一致，汇总信息由条目推导
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    items: Vec<BatchItem>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, item: BatchItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[BatchItem] {
        &self.items
    }

    /// 成功转换的条目，保持输入顺序
    pub fn successes(&self) -> impl Iterator<Item = (&Article, &str)> {
        self.items.iter().filter_map(BatchItem::converted)
    }

    pub fn summary(&self) -> BatchSummary {
        let success = self.items.iter().filter(|item| item.is_success()).count();
        BatchSummary {
            total: self.items.len(),
            success,
            failure: self.items.len() - success,
        }
    }

    /// 渲染文本报告：先汇总，再逐项列出
    pub fn render(&self) -> String {
        let summary = self.summary();
        let mut out = String::new();

        let _ = writeln!(out, "📊 処理結果");
        let _ = writeln!(out, "合計: {}件", summary.total);
        let _ = writeln!(out, "成功: {}件", summary.success);
        let _ = writeln!(out, "失敗: {}件", summary.failure);

        for item in &self.items {
            out.push('\n');
            match &item.outcome {
                ItemOutcome::Converted { article, filename } => {
                    let _ = writeln!(out, "✅ {}", item.url);
                    let _ = writeln!(out, "   タイトル: {}", article.title);
                    let _ = writeln!(out, "   文字数: {}", article.char_count());
                    let _ = writeln!(out, "   ファイル名: {}", filename);
                }
                ItemOutcome::Rejected(_) | ItemOutcome::Failed(_) => {
                    let _ = writeln!(out, "❌ {}", item.url);
                    if let Some(message) = item.error_message() {
                        let _ = writeln!(out, "   エラー: {}", message);
                    }
                }
            }
        }

        out.trim_end().to_string()
    }
}
