//! Server lifecycle - store connection plus HTTP listener.
//!
//! [`run_server`] connects the store and binds the listener;
//! [`RunningServer::close`] stops both again.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tokio::task::JoinHandle;
use tracing_actix_web::TracingLogger;

use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;
#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresPostRepository};

use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::error::json_error_handler;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// Register state, the JSON body config and routes on an app.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler));
        handlers::configure_routes(cfg);
        cfg.default_service(web::to(handlers::not_found));
    }
}

/// The document store behind the server and whatever must be closed with it.
struct Store {
    posts: Arc<dyn PostRepository>,
    #[cfg(feature = "postgres")]
    db: Option<DatabaseConnections>,
}

impl Store {
    fn in_memory() -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    #[cfg(feature = "postgres")]
    async fn close(self) -> anyhow::Result<()> {
        if let Some(db) = self.db {
            db.close().await.context("failed to close database pool")?;
        }
        Ok(())
    }

    #[cfg(not(feature = "postgres"))]
    async fn close(self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "postgres")]
async fn connect_store(config: &AppConfig) -> anyhow::Result<Store> {
    let Some(db_config) = &config.database else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return Ok(Store::in_memory());
    };

    let connections = DatabaseConnections::init(db_config)
        .await
        .context("failed to connect to database")?;
    let posts: Arc<dyn PostRepository> =
        Arc::new(PostgresPostRepository::new(connections.main.clone()));

    Ok(Store {
        posts,
        db: Some(connections),
    })
}

#[cfg(not(feature = "postgres"))]
async fn connect_store(config: &AppConfig) -> anyhow::Result<Store> {
    if config.database.is_some() {
        tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
    } else {
        tracing::info!("Running without database (in-memory mode)");
    }
    Ok(Store::in_memory())
}

/// A bound, serving HTTP listener and its store connection.
pub struct RunningServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<std::io::Result<()>>,
    store: Store,
}

/// Connect the store, bind the listener and start serving.
///
/// Must be called from within an actix runtime. Use port `0` to bind an
/// ephemeral port and read it back with [`RunningServer::addr`].
pub async fn run_server(config: &AppConfig) -> anyhow::Result<RunningServer> {
    let store = connect_store(config).await?;
    let state = AppState::new(store.posts.clone(), config.store_timeout);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .configure(configure_app(state.clone()))
    })
    .shutdown_timeout(config.shutdown_timeout.as_secs());
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = match server.bind((config.host.as_str(), config.port)) {
        Ok(server) => server,
        Err(e) => {
            store.close().await?;
            return Err(e).with_context(|| format!("failed to bind {}:{}", config.host, config.port));
        }
    };
    let addr = server
        .addrs()
        .first()
        .copied()
        .context("listener has no bound address")?;

    let running = server.run();
    let handle = running.handle();
    let task = actix_web::rt::spawn(running);

    tracing::info!(%addr, "HTTP server started");

    Ok(RunningServer {
        addr,
        handle,
        task,
        store,
    })
}

impl RunningServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Gracefully stop the listener, then release the store connection.
    pub async fn close(self) -> anyhow::Result<()> {
        tracing::info!(addr = %self.addr, "Stopping HTTP server");
        self.handle.stop(true).await;
        self.finish().await
    }

    /// Serve until the listener stops on its own (e.g. on SIGINT).
    pub async fn wait(self) -> anyhow::Result<()> {
        self.finish().await
    }

    async fn finish(self) -> anyhow::Result<()> {
        let Self { task, store, .. } = self;
        let served = task.await.context("HTTP server task failed")?;
        store.close().await?;
        served.context("HTTP server exited with an error")
    }
}
