//! In-memory driver repository

use async_trait::async_trait;

use crate::domain::driver::{Driver, DriverId, DriverRepository, NewDriver};
use crate::domain::team::TeamId;
use crate::domain::DomainError;
use crate::infrastructure::storage::InMemoryTable;

/// In-memory implementation of DriverRepository
#[derive(Debug, Default)]
pub struct InMemoryDriverRepository {
    table: InMemoryTable<Driver>,
}

impl InMemoryDriverRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DriverRepository for InMemoryDriverRepository {
    async fn create(&self, driver: NewDriver) -> Result<Driver, DomainError> {
        self.table.insert(|id| driver.into_driver(DriverId::new(id)))
    }

    async fn get_all(&self) -> Result<Vec<Driver>, DomainError> {
        self.table.all()
    }

    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, DomainError> {
        self.table.get(id.value())
    }

    async fn update(
        &self,
        id: DriverId,
        driver: NewDriver,
    ) -> Result<Option<Driver>, DomainError> {
        self.table.replace(id.value(), driver.into_driver(id))
    }

    async fn delete(&self, id: DriverId) -> Result<bool, DomainError> {
        self.table.remove(id.value())
    }

    async fn get_by_team_id(&self, team_id: TeamId) -> Result<Vec<Driver>, DomainError> {
        self.table.filter(|driver| driver.team_id() == team_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryDriverRepository::new();

        let created = repo
            .create(NewDriver::new("Max Verstappen", TeamId::new(1), true))
            .await
            .unwrap();
        let fetched = repo.find_by_id(created.id()).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = InMemoryDriverRepository::new();
        let created = repo
            .create(NewDriver::new("Sergio Perez", TeamId::new(1), true))
            .await
            .unwrap();

        let updated = repo
            .update(created.id(), NewDriver::new("Sergio Perez", TeamId::new(9), false))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.team_id(), TeamId::new(9));
        assert!(!updated.is_titular());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let repo = InMemoryDriverRepository::new();

        let updated = repo
            .update(DriverId::new(5), NewDriver::new("Ghost", TeamId::new(1), false))
            .await
            .unwrap();

        assert!(updated.is_none());
        assert!(!repo.delete(DriverId::new(5)).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_by_team_id() {
        let repo = InMemoryDriverRepository::new();

        repo.create(NewDriver::new("Lando Norris", TeamId::new(2), true))
            .await
            .unwrap();
        repo.create(NewDriver::new("Oscar Piastri", TeamId::new(2), true))
            .await
            .unwrap();
        repo.create(NewDriver::new("George Russell", TeamId::new(3), true))
            .await
            .unwrap();

        let mclaren = repo.get_by_team_id(TeamId::new(2)).await.unwrap();
        assert_eq!(mclaren.len(), 2);
        assert!(mclaren.iter().all(|d| d.team_id() == TeamId::new(2)));

        assert!(repo.get_by_team_id(TeamId::new(77)).await.unwrap().is_empty());
    }
}
