//! Driver repository trait

use async_trait::async_trait;

use super::entity::{Driver, DriverId, NewDriver};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Repository for managing drivers
#[async_trait]
pub trait DriverRepository: Send + Sync + std::fmt::Debug {
    /// Insert a driver and return it with its store-assigned id
    async fn create(&self, driver: NewDriver) -> Result<Driver, DomainError>;

    /// List every driver in the store's natural order
    async fn get_all(&self) -> Result<Vec<Driver>, DomainError>;

    /// Get a driver by ID
    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, DomainError>;

    /// Overwrite the driver's fields; `None` when no row matched `id`
    async fn update(&self, id: DriverId, driver: NewDriver)
        -> Result<Option<Driver>, DomainError>;

    /// Delete a driver by ID, returning whether a row was removed
    async fn delete(&self, id: DriverId) -> Result<bool, DomainError>;

    /// List the drivers whose `team_id` matches; empty when none do
    async fn get_by_team_id(&self, team_id: TeamId) -> Result<Vec<Driver>, DomainError>;
}
