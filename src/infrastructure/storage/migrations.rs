//! Schema migrations for the teams and drivers tables

use tracing::{debug, info};

use super::mysql::RecordStore;
use crate::domain::DomainError;

/// Represents a database migration
///
/// MySQL prepares one statement at a time, so `up` holds a single statement.
#[derive(Debug, Clone)]
pub struct Migration {
    /// Migration version
    pub version: i64,
    /// Human-readable description
    pub description: String,
    /// SQL to run when applying the migration
    pub up: String,
}

impl Migration {
    pub fn new(version: i64, description: impl Into<String>, up: impl Into<String>) -> Self {
        Self {
            version,
            description: description.into(),
            up: up.into(),
        }
    }
}

/// Migrations that create the schema the repositories query
pub fn schema_migrations() -> Vec<Migration> {
    vec![
        Migration::new(
            1,
            "Create teams table",
            r#"
            CREATE TABLE IF NOT EXISTS teams (
                id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(255) NOT NULL
            )
            "#,
        ),
        Migration::new(
            2,
            "Create drivers table",
            r#"
            CREATE TABLE IF NOT EXISTS drivers (
                id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                team_id BIGINT NOT NULL,
                is_titular TINYINT(1) NOT NULL DEFAULT 0,
                INDEX idx_drivers_team_id (team_id)
            )
            "#,
        ),
    ]
}

/// Applies migrations once each, tracking them in `_migrations`
#[derive(Debug, Clone)]
pub struct SchemaMigrator {
    store: RecordStore,
}

impl SchemaMigrator {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        self.store
            .execute(
                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS _migrations (
                        version BIGINT NOT NULL PRIMARY KEY,
                        description VARCHAR(255) NOT NULL,
                        installed_on TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
                    )
                    "#,
                ),
                "Failed to create migrations table",
            )
            .await?;

        Ok(())
    }

    /// Runs a single migration unless it was already applied
    pub async fn run_migration(&self, migration: &Migration) -> Result<bool, DomainError> {
        self.ensure_migrations_table().await?;

        let applied = self
            .store
            .fetch_optional(
                sqlx::query("SELECT version FROM _migrations WHERE version = ?")
                    .bind(migration.version),
                "Failed to check migration status",
            )
            .await?
            .is_some();

        if applied {
            debug!(version = migration.version, "Migration already applied");
            return Ok(false);
        }

        self.store
            .execute(
                sqlx::query(&migration.up),
                &format!("Failed to run migration {}", migration.version),
            )
            .await?;

        self.store
            .execute(
                sqlx::query("INSERT INTO _migrations (version, description) VALUES (?, ?)")
                    .bind(migration.version)
                    .bind(&migration.description),
                &format!("Failed to record migration {}", migration.version),
            )
            .await?;

        info!(
            version = migration.version,
            description = %migration.description,
            "Applied migration"
        );

        Ok(true)
    }
}

/// Runs all pending schema migrations, returning how many were applied
pub async fn run_schema_migrations(store: &RecordStore) -> Result<usize, DomainError> {
    let migrator = SchemaMigrator::new(store.clone());
    let mut applied = 0;

    for migration in schema_migrations() {
        if migrator.run_migration(&migration).await? {
            applied += 1;
        }
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_migrations_order() {
        let migrations = schema_migrations();

        assert!(!migrations.is_empty());

        for pair in migrations.windows(2) {
            assert!(
                pair[1].version > pair[0].version,
                "Migrations should be in ascending order"
            );
        }
    }

    #[test]
    fn test_schema_migrations_single_statement() {
        for migration in schema_migrations() {
            assert!(!migration.description.is_empty());
            assert!(!migration.up.trim().is_empty());
            assert!(!migration.up.contains(';'));
        }
    }

    #[test]
    fn test_drivers_table_stores_titular_as_tinyint() {
        let migrations = schema_migrations();
        let drivers = migrations
            .iter()
            .find(|m| m.up.contains("CREATE TABLE IF NOT EXISTS drivers"))
            .unwrap();

        assert!(drivers.up.contains("is_titular TINYINT(1)"));
        assert!(!drivers.up.contains("FOREIGN KEY"));
    }
}
