//! # Blog API
//!
//! Actix-web HTTP surface for the blog post resource, plus the server
//! lifecycle used by the binary and the integration tests.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::{RunningServer, configure_app, run_server};
pub use state::AppState;
