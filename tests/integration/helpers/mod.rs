// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.


use axum_test::TestServer;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use wiki2md::config::settings::{
    ExportSettings, HttpSettings, MetricsSettings, ServerSettings, Settings,
};
use wiki2md::presentation::routes::{self, AppServices};

use self::mock_engine::MockEngine;

pub const PYTHON_FIXTURE: &str = include_str!("../../fixtures/python_ja.html");
pub const NO_CONTENT_FIXTURE: &str = include_str!("../../fixtures/no_content.html");

pub const PYTHON_URL: &str = "https://ja.wikipedia.org/wiki/Python";
pub const JAVASCRIPT_URL: &str = "https://ja.wikipedia.org/wiki/JavaScript";
pub const NO_CONTENT_URL: &str = "https://ja.wikipedia.org/wiki/Empty";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub engine: Arc<MockEngine>,
    // Keep the export directory alive
    pub export_dir: TempDir,
}

pub fn default_engine() -> MockEngine {
    MockEngine::new()
        .with_page(PYTHON_URL, PYTHON_FIXTURE)
        .with_page(JAVASCRIPT_URL, PYTHON_FIXTURE)
        .with_page(NO_CONTENT_URL, NO_CONTENT_FIXTURE)
}

pub fn test_settings(export_dir: PathBuf, max_download_links: usize) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        http: HttpSettings::default(),
        export: ExportSettings {
            dir: export_dir,
            max_download_links,
        },
        metrics: MetricsSettings {
            enabled: false,
            address: "127.0.0.1:0".to_string(),
        },
    }
}

pub fn create_test_app() -> TestApp {
    create_test_app_with_options(default_engine(), 5)
}

pub fn create_test_app_with_options(engine: MockEngine, max_download_links: usize) -> TestApp {
    let export_dir = tempfile::tempdir().expect("Failed to create export dir");
    let settings = test_settings(export_dir.path().to_path_buf(), max_download_links);
    build_app(engine, export_dir, settings)
}

/// 导出目录被同名普通文件占用，所有写入都会失败
pub fn create_test_app_with_unwritable_export() -> TestApp {
    let export_dir = tempfile::tempdir().expect("Failed to create export dir");
    let blocked = export_dir.path().join("blocked");
    std::fs::write(&blocked, "not a directory").expect("Failed to create blocking file");

    let settings = test_settings(blocked, 5);
    build_app(default_engine(), export_dir, settings)
}

fn build_app(engine: MockEngine, export_dir: TempDir, settings: Settings) -> TestApp {
    let engine = Arc::new(engine);
    let services = AppServices::new(settings, engine.clone());
    let server =
        TestServer::new(routes::create_app(services)).expect("Failed to create test server");

    TestApp {
        server,
        engine,
        export_dir,
    }
}
