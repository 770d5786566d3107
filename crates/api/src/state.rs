use std::sync::Arc;

use portfolio_mail::Mailer;
use portfolio_storage::ObjectStore;

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything is behind an `Arc` or already reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: portfolio_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Image storage; `None` when `R2_*` is not configured.
    pub storage: Option<Arc<dyn ObjectStore>>,
    /// Outgoing email; `None` when no mail transport is configured.
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl AppState {
    /// The configured object store, or a 500 when uploads are disabled.
    pub fn storage(&self) -> AppResult<&dyn ObjectStore> {
        self.storage
            .as_deref()
            .ok_or_else(|| AppError::InternalError("Object storage is not configured".into()))
    }

    /// The configured mailer, or a 500 when email is disabled.
    pub fn mailer(&self) -> AppResult<&dyn Mailer> {
        self.mailer
            .as_deref()
            .ok_or_else(|| AppError::InternalError("Email delivery is not configured".into()))
    }
}
