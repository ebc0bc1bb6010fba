// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 转换管线（markdown_service）：HTML 到清理后 Markdown 的纯函数
/// - 提取服务（extraction_service）：抓取单个URL并转换
/// - 批处理服务（batch_service）：按顺序处理URL列表并汇总结果
pub mod batch_service;
pub mod extraction_service;
pub mod markdown_service;
