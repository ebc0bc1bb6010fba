// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use metrics::counter;
use tracing::info;

use crate::domain::models::batch::{BatchItem, BatchProgress, BatchReport, ItemOutcome};
use crate::domain::services::extraction_service::ExtractionService;
use crate::utils::validators::ValidationError;

/// 把多行输入拆成URL列表
///
/// 每行去掉首尾空白，丢弃空行；保留顺序和重复项
pub fn parse_url_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 批处理服务
///
/// 严格按输入顺序逐个处理，单项失败不会中断整个批次
pub struct BatchService {
    extractor: Arc<ExtractionService>,
}

impl BatchService {
    pub fn new(extractor: Arc<ExtractionService>) -> Self {
        Self { extractor }
    }

    /// 处理批量输入
    ///
    /// # 参数
    ///
    /// * `input` - 多行URL文本
    /// * `on_progress` - 每处理完一项回调一次，仅用于展示
    ///
    /// # 返回值
    ///
    /// * `Ok(BatchReport)` - 覆盖每一行输入的报告
    /// * `Err(ValidationError::EmptyBatch)` - 没有任何URL，未发起请求
    pub async fn process<F>(
        &self,
        input: &str,
        mut on_progress: F,
    ) -> Result<BatchReport, ValidationError>
    where
        F: FnMut(BatchProgress),
    {
        let urls = parse_url_lines(input);
        if urls.is_empty() {
            return Err(ValidationError::EmptyBatch);
        }

        let total = urls.len();
        info!("Starting batch of {} URLs", total);

        let mut report = BatchReport::new();
        for (index, url) in urls.into_iter().enumerate() {
            let outcome = self.extractor.process_url(&url).await;
            let status = match &outcome {
                ItemOutcome::Converted { .. } => "success",
                ItemOutcome::Rejected(_) => "rejected",
                ItemOutcome::Failed(_) => "failure",
            };
            counter!("wiki2md_batch_items_total", "outcome" => status).increment(1);

            let glyph = if status == "success" { "✅" } else { "❌" };
            on_progress(BatchProgress {
                current: index + 1,
                total,
                message: format!("{}/{} {} {}", index + 1, total, glyph, url),
            });

            report.push(BatchItem { url, outcome });
        }

        let summary = report.summary();
        info!(
            "Batch finished: {} total, {} succeeded, {} failed",
            summary.total, summary.success, summary.failure
        );

        Ok(report)
    }
}
