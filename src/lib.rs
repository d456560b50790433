//! F1 Teams API
//!
//! CRUD over Formula 1 teams and drivers backed by MySQL, with:
//! - A JSON HTTP API and a generated OpenAPI document
//! - An in-memory backend for local runs and tests
//! - Prometheus metrics and structured logging

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::storage::StorageFactory;
use tracing::info;

/// Build the application state for the configured storage backend
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage = config.storage_config()?;
    info!(backend = ?storage.storage_type(), "Initializing storage");

    let repositories = StorageFactory::create(&storage).await?;

    Ok(AppState::new(repositories))
}
