// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    create_test_app, create_test_app_with_unwritable_export, NO_CONTENT_URL, PYTHON_URL,
};

#[tokio::test]
async fn index_renders_single_tab_by_default() {
    let app = create_test_app();

    let response = app.server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Wikipedia to Markdown Converter"));
    assert!(html.contains("class=\"active\" href=\"/?tab=single\""));
    assert!(html.contains("action=\"/convert\""));
    assert!(html.contains("https://ja.wikipedia.org/wiki/JavaScript"));
}

#[tokio::test]
async fn index_prefills_example_url() {
    let app = create_test_app();

    let response = app
        .server
        .get("/")
        .add_query_param("tab", "single")
        .add_query_param("url", PYTHON_URL)
        .await;

    assert!(response
        .text()
        .contains(&format!("value=\"{}\"", PYTHON_URL)));
}

#[tokio::test]
async fn index_renders_batch_tab() {
    let app = create_test_app();

    let response = app.server.get("/").add_query_param("tab", "batch").await;
    let html = response.text();
    assert!(html.contains("class=\"active\" href=\"/?tab=batch\""));
    assert!(html.contains("action=\"/batch\""));
}

#[tokio::test]
async fn convert_shows_markdown_and_download_link() {
    let app = create_test_app();

    let response = app.server.post("/convert").form(&[("url", PYTHON_URL)]).await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("# Python"));
    assert!(html.contains("#### グイド・ヴァンロッサム"));
    assert!(!html.contains("[[編集]"));
    assert!(html.contains("href=\"/downloads/Python.md\""));

    assert!(app.export_dir.path().join("Python.md").exists());
    assert_eq!(app.engine.request_count(), 1);
}

#[tokio::test]
async fn convert_shows_validation_messages_without_fetching() {
    let app = create_test_app();

    let cases = [
        ("   ", "URLを入力してください。"),
        (
            "ftp://example.com",
            "有効なURLを入力してください（http://またはhttps://から始まるURL）。",
        ),
        ("https://example.com/foo", "WikipediaのURLを入力してください。"),
    ];

    for (url, message) in cases {
        let response = app.server.post("/convert").form(&[("url", url)]).await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(message), "missing {:?} for {:?}", message, url);
        assert!(!html.contains("/downloads/"));
    }

    assert_eq!(app.engine.request_count(), 0);
}

#[tokio::test]
async fn convert_reports_missing_content_area() {
    let app = create_test_app();

    let response = app
        .server
        .post("/convert")
        .form(&[("url", NO_CONTENT_URL)])
        .await;

    let html = response.text();
    assert!(html.contains("エラー: コンテンツエリアが見つかりませんでした。"));
    assert!(!html.contains("/downloads/"));
}

#[tokio::test]
async fn convert_reports_http_errors() {
    let app = create_test_app();

    let response = app
        .server
        .post("/convert")
        .form(&[("url", "https://ja.wikipedia.org/wiki/Missing")])
        .await;

    assert!(response.text().contains("HTTPリクエストエラー: "));
}

#[tokio::test]
async fn convert_export_failure_still_shows_markdown() {
    let app = create_test_app_with_unwritable_export();

    let response = app.server.post("/convert").form(&[("url", PYTHON_URL)]).await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("# Python"));
    assert!(html.contains("ファイルの保存に失敗しました: "));
    assert!(!html.contains("/downloads/"));
}
