// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::engines::traits::EngineError;

/// 文章提取错误类型
///
/// 提取器对外只返回这三类错误，任何失败都不会越过 `extract` 的边界
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// 网络或 HTTP 状态错误
    #[error("HTTPリクエストエラー: {0}")]
    Http(String),

    /// 页面中没有 `mw-parser-output` 内容区
    #[error("エラー: コンテンツエリアが見つかりませんでした。")]
    ContentAreaNotFound,

    /// 未分类的错误
    #[error("予期せぬエラーが発生しました: {0}")]
    Unexpected(String),
}

impl From<EngineError> for ExtractError {
    fn from(err: EngineError) -> Self {
        ExtractError::Http(err.to_string())
    }
}
