// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含 JSON 接口的数据传输对象和导出用例
pub mod dto;
pub mod usecases;
