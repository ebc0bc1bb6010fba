// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};

use wiki2md::application::dto::batch_request::BatchResponseDto;
use wiki2md::application::dto::convert_request::ConvertResponseDto;

use super::helpers::{create_test_app, create_test_app_with_unwritable_export, PYTHON_URL};

#[tokio::test]
async fn api_convert_returns_article() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/convert")
        .json(&json!({ "url": PYTHON_URL }))
        .await;
    response.assert_status_ok();

    let body: ConvertResponseDto = response.json();
    assert!(body.success);
    assert_eq!(body.title.as_deref(), Some("Python"));
    assert_eq!(body.filename.as_deref(), Some("Python.md"));
    assert_eq!(body.download_url.as_deref(), Some("/downloads/Python.md"));

    let markdown = body.markdown.unwrap();
    assert!(markdown.starts_with("# Python\n\n"));
    assert!(!markdown.contains("外部リンク"));
    assert_eq!(body.char_count, Some(markdown.chars().count()));
}

#[tokio::test]
async fn api_convert_rejects_invalid_url() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/convert")
        .json(&json!({ "url": "ftp://example.com" }))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "有効なURLを入力してください（http://またはhttps://から始まるURL）。"
    );
    assert_eq!(app.engine.request_count(), 0);
}

#[tokio::test]
async fn api_convert_reports_fetch_failure() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/convert")
        .json(&json!({ "url": "https://ja.wikipedia.org/wiki/Missing" }))
        .await;
    response.assert_status_ok();

    let body: ConvertResponseDto = response.json();
    assert!(!body.success);
    assert!(body.markdown.is_none());
    assert!(body.error.unwrap().starts_with("HTTPリクエストエラー: "));
}

#[tokio::test]
async fn api_batch_mixed_input() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/batch")
        .json(&json!({ "urls": [PYTHON_URL, "not-a-url", PYTHON_URL] }))
        .await;
    response.assert_status_ok();

    let body: BatchResponseDto = response.json();
    assert_eq!((body.total, body.success, body.failure), (3, 2, 1));
    assert_eq!(body.items.len(), 3);
    assert_eq!(
        body.items[1].error.as_deref(),
        Some("有効なURLを入力してください（http://またはhttps://から始まるURL）。")
    );
    assert_eq!(body.items[0].title, body.items[2].title);
    assert_eq!(body.items[0].char_count, body.items[2].char_count);

    assert_eq!(body.downloads.files, vec!["/downloads/Python.md"]);
    assert_eq!(
        body.downloads.archive.as_deref(),
        Some("/downloads/wikipedia_articles.zip")
    );
    assert!(body.report.starts_with("📊 処理結果"));
    assert!(body.export_error.is_none());
    assert_eq!(app.engine.request_count(), 2);
}

#[tokio::test]
async fn api_batch_reports_export_failure() {
    let app = create_test_app_with_unwritable_export();

    let response = app
        .server
        .post("/v1/batch")
        .json(&json!({ "urls": [PYTHON_URL] }))
        .await;
    response.assert_status_ok();

    let body: BatchResponseDto = response.json();
    assert_eq!((body.total, body.success, body.failure), (1, 1, 0));
    assert!(body.downloads.files.is_empty());
    assert!(body.downloads.combined.is_none());
    assert!(body.downloads.archive.is_none());
    assert!(body
        .export_error
        .unwrap()
        .starts_with("ファイルの保存に失敗しました: "));
}

#[tokio::test]
async fn api_convert_reports_export_failure() {
    let app = create_test_app_with_unwritable_export();

    let response = app
        .server
        .post("/v1/convert")
        .json(&json!({ "url": PYTHON_URL }))
        .await;

    let body: ConvertResponseDto = response.json();
    assert!(body.success);
    assert!(body.markdown.is_some());
    assert!(body.download_url.is_none());
    assert!(body.error.unwrap().starts_with("ファイルの保存に失敗しました: "));
}

#[tokio::test]
async fn api_batch_rejects_empty_list() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/batch")
        .json(&json!({ "urls": ["", "   "] }))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "URLリストを入力してください。");
    assert_eq!(app.engine.request_count(), 0);
}
