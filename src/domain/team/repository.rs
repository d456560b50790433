//! Team repository trait

use async_trait::async_trait;

use super::entity::{NewTeam, Team, TeamId};
use crate::domain::DomainError;

/// Repository for managing teams
///
/// Each method maps to a single statement against the store. Absent rows
/// are reported through the return value, never as an error.
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Insert a team and return it with its store-assigned id
    async fn create(&self, team: NewTeam) -> Result<Team, DomainError>;

    /// List every team in the store's natural order
    async fn get_all(&self) -> Result<Vec<Team>, DomainError>;

    /// Get a team by ID
    async fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, DomainError>;

    /// Overwrite the team's fields; `None` when no row matched `id`
    async fn update(&self, id: TeamId, team: NewTeam) -> Result<Option<Team>, DomainError>;

    /// Delete a team by ID, returning whether a row was removed
    async fn delete(&self, id: TeamId) -> Result<bool, DomainError>;
}
