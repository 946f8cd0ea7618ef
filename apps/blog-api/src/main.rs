//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use blog_api::telemetry::{TelemetryConfig, init_telemetry};
use blog_api::{AppConfig, run_server};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    let server = run_server(&config).await?;
    tracing::info!("Blog API listening on http://{}", server.addr());

    // Actix handles SIGINT/SIGTERM and stops the listener on its own.
    server.wait().await
}
