//! Application state shared across handlers

use std::sync::Arc;

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// Only the database location is shared; connections are per request.
#[derive(Clone)]
pub struct AppState {
    database: Arc<str>,
}

impl AppState {
    pub fn new(database: &str) -> Self {
        Self {
            database: Arc::from(database),
        }
    }

    /// Open a fresh connection for the current request and run `func` on the
    /// blocking pool. The connection is closed when `func` returns.
    pub async fn with_db<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut DbPool) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let database = Arc::clone(&self.database);
        tokio::task::spawn_blocking(move || {
            let mut pool = DbPool::new(&database)?;
            func(&mut pool)
        })
        .await
        .map_err(|e| AppError::Task(e.to_string()))?
    }
}
