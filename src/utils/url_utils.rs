// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 无法从URL推导文件名时使用的默认文件名
pub const FALLBACK_FILENAME: &str = "wikipedia_article.md";

const ILLEGAL_FILENAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// 根据文章URL推导下载文件名
///
/// 取路径的最后一段，百分号解码后替换文件系统非法字符，并加上 `.md` 后缀
pub fn suggested_filename(url: &str) -> String {
    derive_stem(url)
        .map(|stem| format!("{}.md", stem))
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}

fn derive_stem(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let segment = parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()?
        .to_string();

    let decoded = urlencoding::decode(&segment).ok()?;
    let sanitized = sanitize_filename(&decoded);

    if sanitized.trim_matches(|c| c == '_' || c == '.').is_empty() {
        return None;
    }
    Some(sanitized)
}

/// 把文件系统非法字符和控制字符替换为 `_`
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if ILLEGAL_FILENAME_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}
