//! MySQL driver repository implementation

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use tracing::debug;

use crate::domain::driver::{Driver, DriverId, DriverRepository, NewDriver, TitularFlag};
use crate::domain::team::TeamId;
use crate::domain::DomainError;
use crate::infrastructure::storage::{column, RecordStore};

const SELECT_DRIVERS: &str = "SELECT id, name, team_id, is_titular FROM drivers";

/// MySQL implementation of DriverRepository
#[derive(Debug, Clone)]
pub struct MySqlDriverRepository {
    store: RecordStore,
}

impl MySqlDriverRepository {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DriverRepository for MySqlDriverRepository {
    async fn create(&self, driver: NewDriver) -> Result<Driver, DomainError> {
        let result = self
            .store
            .execute(
                sqlx::query("INSERT INTO drivers (name, team_id, is_titular) VALUES (?, ?, ?)")
                    .bind(&driver.name)
                    .bind(driver.team_id.value())
                    .bind(driver.titular.stored()),
                "Failed to create driver",
            )
            .await?;

        let id = DriverId::new(result.inserted_id()?);
        debug!(driver_id = %id, "Inserted driver row");

        Ok(driver.into_driver(id))
    }

    async fn get_all(&self) -> Result<Vec<Driver>, DomainError> {
        let rows = self
            .store
            .fetch_all(sqlx::query(SELECT_DRIVERS), "Failed to list drivers")
            .await?;

        rows.iter().map(row_to_driver).collect()
    }

    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, DomainError> {
        let sql = format!("{} WHERE id = ?", SELECT_DRIVERS);
        let row = self
            .store
            .fetch_optional(sqlx::query(&sql).bind(id.value()), "Failed to get driver")
            .await?;

        row.as_ref().map(row_to_driver).transpose()
    }

    async fn update(
        &self,
        id: DriverId,
        driver: NewDriver,
    ) -> Result<Option<Driver>, DomainError> {
        let result = self
            .store
            .execute(
                sqlx::query("UPDATE drivers SET name = ?, team_id = ?, is_titular = ? WHERE id = ?")
                    .bind(&driver.name)
                    .bind(driver.team_id.value())
                    .bind(driver.titular.stored())
                    .bind(id.value()),
                "Failed to update driver",
            )
            .await?;

        Ok(result.touched_any().then(|| driver.into_driver(id)))
    }

    async fn delete(&self, id: DriverId) -> Result<bool, DomainError> {
        let result = self
            .store
            .execute(
                sqlx::query("DELETE FROM drivers WHERE id = ?").bind(id.value()),
                "Failed to delete driver",
            )
            .await?;

        Ok(result.touched_any())
    }

    async fn get_by_team_id(&self, team_id: TeamId) -> Result<Vec<Driver>, DomainError> {
        let sql = format!("{} WHERE team_id = ?", SELECT_DRIVERS);
        let rows = self
            .store
            .fetch_all(
                sqlx::query(&sql).bind(team_id.value()),
                "Failed to list drivers by team",
            )
            .await?;

        rows.iter().map(row_to_driver).collect()
    }
}

fn row_to_driver(row: &MySqlRow) -> Result<Driver, DomainError> {
    let id: i64 = column(row, "id")?;
    let name: String = column(row, "name")?;
    let team_id: i64 = column(row, "team_id")?;
    let titular: i8 = column(row, "is_titular")?;

    Ok(Driver::new(
        DriverId::new(id),
        name,
        TeamId::new(team_id),
        TitularFlag::Stored(i64::from(titular)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_lists_every_driver_column() {
        for column in ["id", "name", "team_id", "is_titular"] {
            assert!(SELECT_DRIVERS.contains(column));
        }
    }
}
