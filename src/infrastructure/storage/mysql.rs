//! MySQL record store with connection pooling
//!
//! The store executes one parameterized statement per call. There are no
//! retries and no transactions spanning calls.

use std::time::Duration;

use sqlx::mysql::{MySql, MySqlArguments, MySqlPool, MySqlPoolOptions, MySqlQueryResult, MySqlRow};
use sqlx::query::Query;

use crate::domain::DomainError;

/// A statement with its bound parameters, ready to run against the store
pub type Statement<'q> = Query<'q, MySql, MySqlArguments>;

/// MySQL connection configuration
#[derive(Debug, Clone)]
pub struct MySqlConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection acquire timeout in seconds
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl Default for MySqlConfig {
    fn default() -> Self {
        Self {
            url: "mysql://root@localhost:3306/f1_teams".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl MySqlConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn with_idle_timeout(mut self, secs: u64) -> Self {
        self.idle_timeout_secs = secs;
        self
    }
}

/// Outcome of an INSERT, UPDATE or DELETE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutationResult {
    /// Id generated by the last AUTO_INCREMENT insert, 0 otherwise
    pub insert_id: u64,
    /// Number of rows the statement changed
    pub affected_rows: u64,
}

impl MutationResult {
    /// The inserted id as the signed integer used for record ids
    pub fn inserted_id(&self) -> Result<i64, DomainError> {
        i64::try_from(self.insert_id).map_err(|_| {
            DomainError::storage(format!("Inserted id {} is out of range", self.insert_id))
        })
    }

    pub fn touched_any(&self) -> bool {
        self.affected_rows > 0
    }
}

impl From<MySqlQueryResult> for MutationResult {
    fn from(result: MySqlQueryResult) -> Self {
        Self {
            insert_id: result.last_insert_id(),
            affected_rows: result.rows_affected(),
        }
    }
}

/// Shared handle over the MySQL pool
///
/// Cloning is cheap: clones share the same pool.
#[derive(Debug, Clone)]
pub struct RecordStore {
    pool: MySqlPool,
}

impl RecordStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Open a bounded pool against the configured database
    pub async fn connect(config: &MySqlConfig) -> Result<Self, DomainError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to MySQL: {}", e)))?;

        Ok(Self::new(pool))
    }

    /// Run a read statement and return every row
    pub async fn fetch_all(
        &self,
        statement: Statement<'_>,
        context: &str,
    ) -> Result<Vec<MySqlRow>, DomainError> {
        statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("{}: {}", context, e)))
    }

    /// Run a read statement expected to match at most one row
    pub async fn fetch_optional(
        &self,
        statement: Statement<'_>,
        context: &str,
    ) -> Result<Option<MySqlRow>, DomainError> {
        statement
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("{}: {}", context, e)))
    }

    /// Run a mutating statement
    pub async fn execute(
        &self,
        statement: Statement<'_>,
        context: &str,
    ) -> Result<MutationResult, DomainError> {
        statement
            .execute(&self.pool)
            .await
            .map(MutationResult::from)
            .map_err(|e| DomainError::storage(format!("{}: {}", context, e)))
    }
}

/// Read a column, reporting decode failures as storage errors
pub fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    use sqlx::Row;

    row.try_get(name)
        .map_err(|e| DomainError::storage(format!("Failed to read column '{}': {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = MySqlConfig::new("mysql://f1:secret@db:3306/f1")
            .with_max_connections(20)
            .with_min_connections(2)
            .with_connect_timeout(5)
            .with_idle_timeout(60);

        assert_eq!(config.url, "mysql://f1:secret@db:3306/f1");
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.idle_timeout_secs, 60);
    }

    #[test]
    fn test_inserted_id_in_range() {
        let result = MutationResult {
            insert_id: 42,
            affected_rows: 1,
        };

        assert_eq!(result.inserted_id().unwrap(), 42);
        assert!(result.touched_any());
    }

    #[test]
    fn test_inserted_id_out_of_range() {
        let result = MutationResult {
            insert_id: u64::MAX,
            affected_rows: 1,
        };

        assert!(matches!(
            result.inserted_id(),
            Err(DomainError::Storage { .. })
        ));
    }

    #[test]
    fn test_no_rows_touched() {
        assert!(!MutationResult::default().touched_any());
    }
}
