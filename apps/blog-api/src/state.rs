//! Application state - shared across all handlers.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use crate::middleware::error::{AppError, AppResult};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub store_timeout: Duration,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>, store_timeout: Duration) -> Self {
        Self {
            posts,
            store_timeout,
        }
    }

    /// Run a store call under the request deadline.
    pub async fn store<T, F>(&self, call: F) -> AppResult<T>
    where
        F: Future<Output = Result<T, RepoError>>,
    {
        match tokio::time::timeout(self.store_timeout, call).await {
            Ok(result) => Ok(result?),
            Err(_) => {
                tracing::error!(
                    timeout_ms = self.store_timeout.as_millis() as u64,
                    "Document store call timed out"
                );
                Err(AppError::Timeout)
            }
        }
    }
}
