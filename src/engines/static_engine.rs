// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::engines::traits::{EngineError, ScrapeRequest, ScrapeResponse, ScraperEngine};

/// 测试用的静态抓取引擎
///
/// 按URL返回预先登记的页面，未登记的URL返回 404，并记录请求次数
#[derive(Default)]
pub struct StaticEngine {
    pages: HashMap<String, (u16, Vec<u8>)>,
    requests: AtomicUsize,
    requested_urls: Mutex<Vec<String>>,
}

impl StaticEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个 200 页面
    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(url.into(), (200, body.into()));
        self
    }

    /// 登记一个指定状态码的响应
    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.pages.insert(url.into(), (status, Vec::new()));
        self
    }

    /// 已收到的请求数
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// 按顺序记录的请求URL
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested_urls
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ScraperEngine for StaticEngine {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResponse, EngineError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut urls) = self.requested_urls.lock() {
            urls.push(request.url.clone());
        }

        let (status, body) = self
            .pages
            .get(&request.url)
            .cloned()
            .unwrap_or((404, Vec::new()));

        if !(200..300).contains(&status) {
            return Err(EngineError::HttpStatus {
                status,
                url: request.url.clone(),
            });
        }

        Ok(ScrapeResponse {
            status_code: status,
            body,
            response_time_ms: 0,
        })
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
