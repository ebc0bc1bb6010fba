// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use encoding_rs::SHIFT_JIS;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wiki2md::config::settings::HttpSettings;
use wiki2md::domain::models::batch::ItemOutcome;
use wiki2md::domain::services::extraction_service::ExtractionService;
use wiki2md::engines::reqwest_engine::ReqwestEngine;
use wiki2md::utils::errors::ExtractError;

const PYTHON_FIXTURE: &str = include_str!("../../fixtures/python_ja.html");

fn extractor() -> ExtractionService {
    let engine = ReqwestEngine::new(&HttpSettings::default()).unwrap();
    ExtractionService::new(Arc::new(engine))
}

#[tokio::test]
async fn test_process_url_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wikipedia.org/wiki/Python"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=UTF-8")
                .set_body_bytes(PYTHON_FIXTURE.as_bytes()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/wikipedia.org/wiki/Python", server.uri());
    match extractor().process_url(&url).await {
        ItemOutcome::Converted { article, filename } => {
            assert_eq!(article.title, "Python");
            assert_eq!(filename, "Python.md");
            assert!(!article.markdown.contains("参考文献その一"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_shift_jis_page_over_http() {
    let html = "<html><head><meta charset=\"Shift_JIS\"></head><body>\
        <h1 id=\"firstHeading\">日本語</h1>\
        <div class=\"mw-parser-output\"><p>シフトJISで書かれた本文です。</p>\
        <p>日本語の文章を十分な長さで用意して、文字コードの判定が確実に行われるようにします。</p></div>\
        </body></html>";
    let (bytes, _, _) = SHIFT_JIS.encode(html);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/sjis"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes.into_owned()))
        .mount(&server)
        .await;

    let article = extractor()
        .extract(&format!("{}/wiki/sjis", server.uri()))
        .await
        .unwrap();
    assert_eq!(article.title, "日本語");
    assert!(article.markdown.contains("シフトJISで書かれた本文です。"));
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/Old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", "/wiki/Python"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wiki/Python"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PYTHON_FIXTURE.as_bytes()))
        .mount(&server)
        .await;

    let article = extractor()
        .extract(&format!("{}/wiki/Old", server.uri()))
        .await
        .unwrap();
    assert_eq!(article.title, "Python");
}

#[tokio::test]
async fn test_server_error_is_reported_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/Down"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = extractor()
        .extract(&format!("{}/wiki/Down", server.uri()))
        .await
        .unwrap_err();
    match err {
        ExtractError::Http(message) => assert!(message.contains("500")),
        other => panic!("unexpected error: {:?}", other),
    }
}
