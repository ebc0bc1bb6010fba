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

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use metrics::{counter, histogram};
use tracing::{debug, error, info, warn};

use crate::domain::models::article::ExtractionResult;
use crate::domain::models::batch::ItemOutcome;
use crate::domain::services::markdown_service;
use crate::engines::traits::{ScrapeRequest, ScraperEngine};
use crate::utils::errors::ExtractError;
use crate::utils::text_encoding;
use crate::utils::url_utils;
use crate::utils::validators;

/// 提取服务
///
/// 抓取单个维基百科页面并转换为 Markdown。除共享的抓取引擎外没有状态
pub struct ExtractionService {
    engine: Arc<dyn ScraperEngine>,
}

impl ExtractionService {
    pub fn new(engine: Arc<dyn ScraperEngine>) -> Self {
        Self { engine }
    }

    /// 提取文章
    ///
    /// 调用方负责先校验URL。任何失败都转换为 `ExtractError` 返回
    pub async fn extract(&self, url: &str) -> ExtractionResult {
        let result = self.fetch_and_convert(url).await;

        match &result {
            Ok(article) => {
                info!("Converted {} ({} chars)", url, article.char_count());
                counter!("wiki2md_extractions_total", "outcome" => "success").increment(1);
            }
            Err(ExtractError::Unexpected(message)) => {
                error!("Unexpected error while converting {}: {}", url, message);
                counter!("wiki2md_extractions_total", "outcome" => "unexpected").increment(1);
            }
            Err(e) => {
                warn!("Failed to convert {}: {}", url, e);
                counter!("wiki2md_extractions_total", "outcome" => "failure").increment(1);
            }
        }

        result
    }

    /// 校验并提取，返回单项结果
    ///
    /// 单URL模式和批量模式共用这一流程
    pub async fn process_url(&self, url: &str) -> ItemOutcome {
        let url = url.trim();
        if let Err(e) = validators::validate_wikipedia_url(url) {
            debug!("Rejected {:?}: {}", url, e);
            return ItemOutcome::Rejected(e);
        }

        match self.extract(url).await {
            Ok(article) => ItemOutcome::Converted {
                article,
                filename: url_utils::suggested_filename(url),
            },
            Err(e) => ItemOutcome::Failed(e),
        }
    }

    async fn fetch_and_convert(&self, url: &str) -> ExtractionResult {
        let response = self.engine.scrape(&ScrapeRequest::new(url)).await?;
        histogram!("wiki2md_fetch_duration_seconds")
            .record(response.response_time_ms as f64 / 1000.0);

        debug!(
            "{} returned {} ({} bytes) via {}",
            url,
            response.status_code,
            response.body.len(),
            self.engine.name()
        );

        let decoded = text_encoding::decode_html(&response.body);
        convert_guarded(&decoded.text)
    }
}

/// 运行转换管线，把 panic 也转换为 `ExtractError::Unexpected`
fn convert_guarded(html: &str) -> ExtractionResult {
    panic::catch_unwind(AssertUnwindSafe(|| markdown_service::convert_html(html)))
        .unwrap_or_else(|payload| Err(ExtractError::Unexpected(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
