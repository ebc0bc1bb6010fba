// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::presentation::theme::ZenTheme;

/// 单URL模式的示例
pub const EXAMPLE_URLS: &[&str] = &[
    "https://ja.wikipedia.org/wiki/Python",
    "https://ja.wikipedia.org/wiki/JavaScript",
    "https://ja.wikipedia.org/wiki/HTML",
];

const URL_PLACEHOLDER: &str = "https://ja.wikipedia.org/wiki/...";

/// 单URL标签页的内容
#[derive(Debug, Clone, Default)]
pub struct SingleView {
    pub url: String,
    pub output: String,
    /// 转换成功时的下载文件名
    pub download: Option<String>,
    pub notice: Option<String>,
}

/// 批量标签页的内容
#[derive(Debug, Clone, Default)]
pub struct BatchView {
    pub urls: String,
    pub report: String,
    /// 展示的单篇下载文件名
    pub downloads: Vec<String>,
    /// 因数量上限未展示的单篇文件数
    pub hidden_downloads: usize,
    pub combined: Option<String>,
    pub archive: Option<String>,
    pub notice: Option<String>,
}

/// 页面内容
#[derive(Debug, Clone)]
pub enum PageView {
    Single(SingleView),
    Batch(BatchView),
}

/// 下载链接
pub fn download_href(name: &str) -> String {
    format!("/downloads/{}", urlencoding::encode(name))
}

pub fn render_page(theme: &ZenTheme, view: &PageView) -> String {
    let (single_class, batch_class, body) = match view {
        PageView::Single(single) => ("active", "", render_single(single)),
        PageView::Batch(batch) => ("", "active", render_batch(batch)),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Wikipedia to Markdown Converter</title>
<style>{css}</style>
</head>
<body>
<main>
<header class="hero">
<h1>📚 Wikipedia to Markdown Converter</h1>
<p>WikipediaのURLを入力して、Markdown形式に変換します</p>
</header>
<nav class="tabs">
<a class="{single_class}" href="/?tab=single">🔗 単一URL</a>
<a class="{batch_class}" href="/?tab=batch">📋 一括変換</a>
</nav>
{body}
<footer>
<h3>🧘‍♀️ ZENテーマ</h3>
<p>和モダンなデザインで、使いやすさと美しさを追求しました</p>
</footer>
</main>
</body>
</html>
"#,
        css = theme.stylesheet(),
    )
}

fn render_single(view: &SingleView) -> String {
    let mut side = String::new();
    if let Some(name) = &view.download {
        side.push_str(&format!(
            "<p>📥 <a href=\"{href}\" download>{name}</a></p>\n",
            href = encode_double_quoted_attribute(&download_href(name)),
            name = encode_text(name),
        ));
    }
    if let Some(notice) = &view.notice {
        side.push_str(&format!("<p class=\"notice\">{}</p>\n", encode_text(notice)));
    }

    let examples = EXAMPLE_URLS
        .iter()
        .map(|url| {
            let href = format!("/?tab=single&url={}", urlencoding::encode(url));
            format!(
                "<li><a href=\"{}\">{}</a></li>",
                encode_double_quoted_attribute(&href),
                encode_text(url)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="columns">
<form class="block" method="post" action="/convert">
<label for="url">🔗 Wikipedia URL</label>
<input type="text" id="url" name="url" placeholder="{placeholder}" value="{url}">
<button type="submit">✨ 変換する</button>
<h3>例</h3>
<ul>
{examples}
</ul>
<h3>🎯 使用方法</h3>
<ol>
<li>変換したいWikipediaページのURLを入力します</li>
<li>「✨ 変換する」ボタンをクリックします</li>
<li>生成されたMarkdownをコピーするか、ファイルをダウンロードします</li>
</ol>
</form>
<div class="block">
<label for="output">📝 変換されたMarkdown</label>
<textarea class="output" id="output" readonly>{output}</textarea>
{side}</div>
</section>"#,
        placeholder = encode_double_quoted_attribute(URL_PLACEHOLDER),
        url = encode_double_quoted_attribute(&view.url),
        output = encode_text(&view.output),
    )
}

fn render_batch(view: &BatchView) -> String {
    let mut links = String::new();
    for name in &view.downloads {
        links.push_str(&download_item("📄", name));
    }
    if view.hidden_downloads > 0 {
        links.push_str(&format!(
            "<li class=\"notice\">他 {} 件はZIPに含まれています</li>\n",
            view.hidden_downloads
        ));
    }
    if let Some(name) = &view.combined {
        links.push_str(&download_item("📚", name));
    }
    if let Some(name) = &view.archive {
        links.push_str(&download_item("🗜️", name));
    }

    let downloads = if links.is_empty() {
        String::new()
    } else {
        format!("<h3>📥 ダウンロード</h3>\n<ul class=\"downloads\">\n{}</ul>\n", links)
    };

    let notice = view
        .notice
        .as_ref()
        .map(|n| format!("<p class=\"notice\">{}</p>\n", encode_text(n)))
        .unwrap_or_default();

    format!(
        r#"<section class="columns">
<form class="block" method="post" action="/batch">
<label for="urls">📋 Wikipedia URLリスト（1行に1つ）</label>
<textarea id="urls" name="urls" rows="12" placeholder="{placeholder}">{urls}</textarea>
<button type="submit">✨ 一括変換する</button>
</form>
<div class="block">
<label for="report">📊 処理結果</label>
<textarea class="output" id="report" readonly>{report}</textarea>
{downloads}{notice}</div>
</section>"#,
        placeholder = encode_double_quoted_attribute(URL_PLACEHOLDER),
        urls = encode_text(&view.urls),
        report = encode_text(&view.report),
    )
}

fn download_item(icon: &str, name: &str) -> String {
    format!(
        "<li>{icon} <a href=\"{href}\" download>{name}</a></li>\n",
        href = encode_double_quoted_attribute(&download_href(name)),
        name = encode_text(name),
    )
}
