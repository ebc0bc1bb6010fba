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

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use wiki2md::config::settings::Settings;
use wiki2md::engines::reqwest_engine::ReqwestEngine;
use wiki2md::engines::traits::ScraperEngine;
use wiki2md::infrastructure::metrics;
use wiki2md::presentation::routes::{self, AppServices};
use wiki2md::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting wiki2md...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    metrics::init_metrics(&settings.metrics);

    // 3. Shared HTTP client
    let engine: Arc<dyn ScraperEngine> = Arc::new(ReqwestEngine::new(&settings.http)?);
    info!(
        "HTTP engine initialized (timeout {}s, max {} redirects)",
        settings.http.timeout_secs, settings.http.max_redirects
    );

    tokio::fs::create_dir_all(&settings.export.dir).await?;
    info!("Export directory: {}", settings.export.dir.display());

    // 4. Start HTTP server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let app = routes::create_app(AppServices::new(settings, engine));

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
