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

use thiserror::Error;

/// 必须出现在 URL 中的主机片段
pub const WIKIPEDIA_HOST_MARKER: &str = "wikipedia.org";

/// 验证错误类型
///
/// Display 文本直接展示给用户
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// URL为空
    #[error("URLを入力してください。")]
    EmptyUrl,
    /// 缺少 http:// 或 https:// 前缀
    #[error("有効なURLを入力してください（http://またはhttps://から始まるURL）。")]
    InvalidScheme,
    /// 不是维基百科的URL
    #[error("WikipediaのURLを入力してください。")]
    NotWikipedia,
    /// 批量输入中没有任何URL
    #[error("URLリストを入力してください。")]
    EmptyBatch,
}

/// 验证维基百科URL
///
/// 只做字符串层面的检查，不发起任何网络请求
///
/// # 参数
///
/// * `url` - 用户输入的 URL
///
/// # 返回值
///
/// * `Ok(())` - URL可以交给提取器
/// * `Err(ValidationError)` - URL被拒绝
pub fn validate_wikipedia_url(url: &str) -> Result<(), ValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::InvalidScheme);
    }

    if !url.contains(WIKIPEDIA_HOST_MARKER) {
        return Err(ValidationError::NotWikipedia);
    }

    Ok(())
}
