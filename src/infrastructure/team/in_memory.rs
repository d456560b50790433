//! In-memory team repository

use async_trait::async_trait;

use crate::domain::team::{NewTeam, Team, TeamId, TeamRepository};
use crate::domain::DomainError;
use crate::infrastructure::storage::InMemoryTable;

/// In-memory implementation of TeamRepository
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    table: InMemoryTable<Team>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn create(&self, team: NewTeam) -> Result<Team, DomainError> {
        self.table.insert(|id| team.into_team(TeamId::new(id)))
    }

    async fn get_all(&self) -> Result<Vec<Team>, DomainError> {
        self.table.all()
    }

    async fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        self.table.get(id.value())
    }

    async fn update(&self, id: TeamId, team: NewTeam) -> Result<Option<Team>, DomainError> {
        self.table.replace(id.value(), team.into_team(id))
    }

    async fn delete(&self, id: TeamId) -> Result<bool, DomainError> {
        self.table.remove(id.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_id() {
        let repo = InMemoryTeamRepository::new();

        let team = repo.create(NewTeam::new("Red Bull Racing")).await.unwrap();

        assert_eq!(team.id(), TeamId::new(1));
        assert_eq!(team.name(), "Red Bull Racing");
    }

    #[tokio::test]
    async fn test_find_by_id_after_create() {
        let repo = InMemoryTeamRepository::new();

        let created = repo.create(NewTeam::new("Ferrari")).await.unwrap();
        let fetched = repo.find_by_id(created.id()).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_update_existing() {
        let repo = InMemoryTeamRepository::new();
        let created = repo.create(NewTeam::new("Mercedes")).await.unwrap();

        let updated = repo
            .update(created.id(), NewTeam::new("Mercedes-AMG Petronas F1 Team"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name(), "Mercedes-AMG Petronas F1 Team");

        let fetched = repo.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryTeamRepository::new();

        let updated = repo
            .update(TeamId::new(999), NewTeam::new("Williams"))
            .await
            .unwrap();

        assert!(updated.is_none());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryTeamRepository::new();
        let created = repo.create(NewTeam::new("Alpine")).await.unwrap();

        assert!(repo.delete(created.id()).await.unwrap());
        assert!(repo.find_by_id(created.id()).await.unwrap().is_none());
        assert!(!repo.delete(created.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_all() {
        let repo = InMemoryTeamRepository::new();

        repo.create(NewTeam::new("McLaren")).await.unwrap();
        repo.create(NewTeam::new("Aston Martin")).await.unwrap();

        let teams = repo.get_all().await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name(), "McLaren");
        assert_eq!(teams[1].name(), "Aston Martin");
    }
}
