// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    application::usecases::export_batch::ExportUseCase,
    config::settings::Settings,
    domain::services::{batch_service::BatchService, extraction_service::ExtractionService},
    engines::traits::ScraperEngine,
    infrastructure::storage::LocalStorage,
    presentation::{
        handlers::{api_handler, batch_handler, convert_handler, download_handler},
        theme::ZenTheme,
    },
};

/// 路由依赖的共享服务
///
/// 启动时构造一次，各部分以 `Arc` 形式注入
#[derive(Clone)]
pub struct AppServices {
    pub extractor: Arc<ExtractionService>,
    pub batch: Arc<BatchService>,
    pub exporter: Arc<ExportUseCase>,
    pub storage: Arc<LocalStorage>,
    pub settings: Arc<Settings>,
    pub theme: Arc<ZenTheme>,
}

impl AppServices {
    pub fn new(settings: Settings, engine: Arc<dyn ScraperEngine>) -> Self {
        let extractor = Arc::new(ExtractionService::new(engine));
        let storage = Arc::new(LocalStorage::new(settings.export.dir.clone()));

        Self {
            batch: Arc::new(BatchService::new(extractor.clone())),
            exporter: Arc::new(ExportUseCase::new(storage.clone())),
            extractor,
            storage,
            settings: Arc::new(settings),
            theme: Arc::new(ZenTheme::zen()),
        }
    }
}

/// 创建应用路由
///
/// # 返回值
///
/// 返回注入了全部服务的路由
pub fn create_app(services: AppServices) -> Router {
    let page_routes = Router::new()
        .route("/", get(convert_handler::index))
        .route("/convert", post(convert_handler::convert))
        .route("/batch", post(batch_handler::batch))
        .route("/downloads/{name}", get(download_handler::download));

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/v1/convert", post(api_handler::convert))
        .route("/v1/batch", post(api_handler::batch));

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(Extension(services.extractor))
        .layer(Extension(services.batch))
        .layer(Extension(services.exporter))
        .layer(Extension(services.storage))
        .layer(Extension(services.settings))
        .layer(Extension(services.theme))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
