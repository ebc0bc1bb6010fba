// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct BatchRequestDto {
    pub urls: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BatchResponseDto {
    pub total: usize,
    pub success: usize,
    pub failure: usize,
    pub items: Vec<BatchItemDto>,
    /// 文本报告
    pub report: String,
    pub downloads: BatchDownloadsDto,
    /// 导出失败或部分文件未保存时的提示
    pub export_error: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BatchItemDto {
    pub url: String,
    pub success: bool,
    pub title: Option<String>,
    pub char_count: Option<usize>,
    pub filename: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BatchDownloadsDto {
    pub files: Vec<String>,
    pub combined: Option<String>,
    pub archive: Option<String>,
}
