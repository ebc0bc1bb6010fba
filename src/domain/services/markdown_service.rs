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

use std::sync::{LazyLock, OnceLock};

use ego_tree::NodeRef;
use htmd::options::{HeadingStyle, Options};
use htmd::HtmlToMarkdown;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use crate::domain::models::article::{Article, PLACEHOLDER_TITLE};
use crate::utils::errors::ExtractError;

/// 脚注章节的起始标记，从这里开始的内容全部丢弃
pub const FOOTNOTE_MARKER: &str = "\n## 脚注";

const TITLE_SELECTOR: &str = "#firstHeading";
const CONTENT_SELECTOR: &str = ".mw-parser-output";
const EDIT_SECTION_CLASS: &str = "mw-editsection";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

static EDIT_LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\?\[\[編集\]\(.+?\)\\?\]\n").expect("edit link pattern is a valid regex")
});

fn converter() -> &'static HtmlToMarkdown {
    static CONVERTER: OnceLock<HtmlToMarkdown> = OnceLock::new();
    CONVERTER.get_or_init(|| {
        HtmlToMarkdown::builder()
            .skip_tags(vec!["head", "script", "style", "noscript"])
            .options(Options {
                heading_style: HeadingStyle::Atx,
                ..Default::default()
            })
            .build()
    })
}

/// 把维基百科页面 HTML 转换为文章
///
/// 纯函数：同样的输入总是得到逐字节相同的输出
///
/// # 参数
///
/// * `html` - 已解码的页面 HTML
///
/// # 返回值
///
/// * `Ok(Article)` - 转换后的文章
/// * `Err(ExtractError::ContentAreaNotFound)` - 页面没有正文区域
pub fn convert_html(html: &str) -> Result<Article, ExtractError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document)?;
    debug!("页面标题: {}", title);

    let content_selector = parse_selector(CONTENT_SELECTOR)?;
    let content = document
        .select(&content_selector)
        .next()
        .ok_or(ExtractError::ContentAreaNotFound)?;

    let rewritten = render_with_terms_as_headings(content);
    let markdown = html_to_markdown(&rewritten)?;

    let body = unescape_brackets(truncate_footnotes(&markdown));
    let body = strip_edit_links(&body);

    Ok(Article::compose(title, &body))
}

fn extract_title(document: &Html) -> Result<String, ExtractError> {
    let selector = parse_selector(TITLE_SELECTOR)?;
    let title = document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());
    Ok(title)
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::Unexpected(e.to_string()))
}

/// 序列化正文区域，并把每个 `dt` 改写为 `h4`
///
/// 子节点原样保留；编辑链接所在的 `mw-editsection` 元素不输出
pub fn render_with_terms_as_headings(content: ElementRef<'_>) -> String {
    let mut out = String::new();
    write_node(*content, &mut out);
    out
}

fn write_node(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => {
            let text: &str = text;
            out.push_str(&html_escape::encode_text(text));
        }
        Node::Element(element) => {
            if element.classes().any(|class| class == EDIT_SECTION_CLASS) {
                return;
            }

            let name = match element.name() {
                "dt" => "h4",
                other => other,
            };

            out.push('<');
            out.push_str(name);
            for (key, value) in element.attrs() {
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(value));
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&name) {
                return;
            }

            for child in node.children() {
                write_node(child, out);
            }

            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        Node::Document | Node::Fragment => {
            for child in node.children() {
                write_node(child, out);
            }
        }
        _ => {}
    }
}

/// HTML 转 Markdown，不折行
pub fn html_to_markdown(html: &str) -> Result<String, ExtractError> {
    converter()
        .convert(html)
        .map_err(|e| ExtractError::Unexpected(e.to_string()))
}

/// 在第一个 `\n## 脚注` 处截断
pub fn truncate_footnotes(markdown: &str) -> &str {
    match markdown.find(FOOTNOTE_MARKER) {
        Some(index) => &markdown[..index],
        None => markdown,
    }
}

/// 还原 htmd 对正文方括号的转义
///
/// `\\` 成对保留，只把 `\[`、`\]` 还原为 `[`、`]`
pub fn unescape_brackets(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    let mut chars = markdown.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('[') | Some(']') => {}
            Some('\\') => {
                out.push(ch);
                out.extend(chars.next());
            }
            _ => out.push(ch),
        }
    }
    out
}

/// 删除所有 `[[編集](...)]` 加换行的编辑链接，括号转义与否都匹配
pub fn strip_edit_links(markdown: &str) -> String {
    EDIT_LINK_PATTERN.replace_all(markdown, "").into_owned()
}
