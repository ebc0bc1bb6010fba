// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模块
///
/// 包含文章、批量报告、导出产物等核心实体，以及转换和批处理服务
pub mod models;
pub mod services;
