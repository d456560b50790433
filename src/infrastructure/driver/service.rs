//! Driver service

use std::sync::Arc;

use tracing::info;

use crate::domain::driver::{Driver, DriverId, DriverRepository, NewDriver};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Driver service; every call goes straight to the repository
#[derive(Debug, Clone)]
pub struct DriverService {
    drivers: Arc<dyn DriverRepository>,
}

impl DriverService {
    pub fn new(drivers: Arc<dyn DriverRepository>) -> Self {
        Self { drivers }
    }

    pub async fn create_driver(&self, driver: NewDriver) -> Result<Driver, DomainError> {
        info!(name = %driver.name, team_id = %driver.team_id, "Creating driver");
        self.drivers.create(driver).await
    }

    pub async fn get_all_drivers(&self) -> Result<Vec<Driver>, DomainError> {
        self.drivers.get_all().await
    }

    pub async fn get_driver_by_id(&self, id: DriverId) -> Result<Option<Driver>, DomainError> {
        self.drivers.find_by_id(id).await
    }

    pub async fn update_driver(
        &self,
        id: DriverId,
        driver: NewDriver,
    ) -> Result<Option<Driver>, DomainError> {
        info!(driver_id = %id, "Updating driver");
        self.drivers.update(id, driver).await
    }

    pub async fn delete_driver(&self, id: DriverId) -> Result<bool, DomainError> {
        info!(driver_id = %id, "Deleting driver");
        self.drivers.delete(id).await
    }

    pub async fn get_drivers_by_team_id(
        &self,
        team_id: TeamId,
    ) -> Result<Vec<Driver>, DomainError> {
        self.drivers.get_by_team_id(team_id).await
    }
}
