// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ConvertRequestDto {
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ConvertResponseDto {
    pub success: bool,
    pub url: String,
    pub title: Option<String>,
    pub markdown: Option<String>,
    pub char_count: Option<usize>,
    pub filename: Option<String>,
    /// 下载链接，导出失败时为空
    pub download_url: Option<String>,
    pub error: Option<String>,
}
