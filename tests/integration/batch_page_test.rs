// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    create_test_app, create_test_app_with_options, create_test_app_with_unwritable_export,
    default_engine, JAVASCRIPT_URL, PYTHON_URL,
};

#[tokio::test]
async fn batch_renders_report_and_downloads() {
    let app = create_test_app();

    let input = format!("{}\nnot-a-url\n\n{}\n", PYTHON_URL, PYTHON_URL);
    let response = app.server.post("/batch").form(&[("urls", input.as_str())]).await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("合計: 3件"));
    assert!(html.contains("成功: 2件"));
    assert!(html.contains("失敗: 1件"));
    assert!(html.contains("❌ not-a-url"));
    assert!(html.contains("ファイル名: Python.md"));

    assert!(html.contains("href=\"/downloads/Python.md\""));
    assert!(html.contains("href=\"/downloads/wikipedia_articles_combined.md\""));
    assert!(html.contains("href=\"/downloads/wikipedia_articles.zip\""));

    assert_eq!(app.engine.request_count(), 2);
}

#[tokio::test]
async fn blank_batch_is_rejected_without_fetching() {
    let app = create_test_app();

    let response = app.server.post("/batch").form(&[("urls", "\n  \n")]).await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("URLリストを入力してください。"));
    assert!(!html.contains("/downloads/"));
    assert_eq!(app.engine.request_count(), 0);
}

#[tokio::test]
async fn batch_without_successes_offers_no_downloads() {
    let app = create_test_app();

    let response = app
        .server
        .post("/batch")
        .form(&[("urls", "not-a-url\nhttps://example.com/foo")])
        .await;

    let html = response.text();
    assert!(html.contains("成功: 0件"));
    assert!(!html.contains("/downloads/"));
    assert_eq!(std::fs::read_dir(app.export_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn batch_limits_individual_download_links() {
    let app = create_test_app_with_options(default_engine(), 1);

    let input = format!("{}\n{}", PYTHON_URL, JAVASCRIPT_URL);
    let response = app.server.post("/batch").form(&[("urls", input.as_str())]).await;

    let html = response.text();
    assert!(html.contains("href=\"/downloads/Python.md\""));
    assert!(!html.contains("href=\"/downloads/JavaScript.md\""));
    assert!(html.contains("他 1 件"));
    assert!(html.contains("href=\"/downloads/wikipedia_articles.zip\""));
}

#[tokio::test]
async fn batch_export_failure_keeps_report() {
    let app = create_test_app_with_unwritable_export();

    let response = app.server.post("/batch").form(&[("urls", PYTHON_URL)]).await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("成功: 1件"));
    assert!(html.contains("ファイルの保存に失敗しました: "));
    assert!(!html.contains("/downloads/"));
}
