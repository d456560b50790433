//! Repository factory for runtime storage selection

use std::sync::Arc;

use tracing::info;

use crate::domain::driver::DriverRepository;
use crate::domain::team::TeamRepository;
use crate::domain::DomainError;
use crate::infrastructure::driver::{InMemoryDriverRepository, MySqlDriverRepository};
use crate::infrastructure::team::{InMemoryTeamRepository, MySqlTeamRepository};

use super::migrations::run_schema_migrations;
use super::mysql::{MySqlConfig, RecordStore};

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// MySQL storage
    MySql,
}

impl std::str::FromStr for StorageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Ok(Self::InMemory),
            "mysql" | "mariadb" => Ok(Self::MySql),
            other => Err(DomainError::configuration(format!(
                "unknown storage backend '{}'",
                other
            ))),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// MySQL storage configuration
    MySql {
        config: MySqlConfig,
        run_migrations: bool,
    },
}

impl StorageConfig {
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    pub fn mysql(config: MySqlConfig, run_migrations: bool) -> Self {
        Self::MySql {
            config,
            run_migrations,
        }
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::MySql { .. } => StorageType::MySql,
        }
    }
}

/// The repositories the services are built on
#[derive(Debug, Clone)]
pub struct Repositories {
    pub teams: Arc<dyn TeamRepository>,
    pub drivers: Arc<dyn DriverRepository>,
}

impl Repositories {
    /// Empty in-memory repositories
    pub fn in_memory() -> Self {
        Self {
            teams: Arc::new(InMemoryTeamRepository::new()),
            drivers: Arc::new(InMemoryDriverRepository::new()),
        }
    }

    /// MySQL repositories sharing one pool
    pub fn mysql(store: RecordStore) -> Self {
        Self {
            teams: Arc::new(MySqlTeamRepository::new(store.clone())),
            drivers: Arc::new(MySqlDriverRepository::new(store)),
        }
    }
}

/// Factory for creating repositories
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates repositories based on the configuration
    pub async fn create(config: &StorageConfig) -> Result<Repositories, DomainError> {
        match config {
            StorageConfig::InMemory => {
                info!("Using in-memory storage");
                Ok(Repositories::in_memory())
            }
            StorageConfig::MySql {
                config,
                run_migrations,
            } => {
                info!("Connecting to MySQL...");
                let store = RecordStore::connect(config).await?;
                info!("MySQL connection established");

                if *run_migrations {
                    let applied = run_schema_migrations(&store).await?;
                    info!(applied, "Schema migrations complete");
                }

                Ok(Repositories::mysql(store))
            }
        }
    }
}
