//! MySQL team repository implementation

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use tracing::debug;

use crate::domain::team::{NewTeam, Team, TeamId, TeamRepository};
use crate::domain::DomainError;
use crate::infrastructure::storage::{column, RecordStore};

/// MySQL implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct MySqlTeamRepository {
    store: RecordStore,
}

impl MySqlTeamRepository {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TeamRepository for MySqlTeamRepository {
    async fn create(&self, team: NewTeam) -> Result<Team, DomainError> {
        let result = self
            .store
            .execute(
                sqlx::query("INSERT INTO teams (name) VALUES (?)").bind(&team.name),
                "Failed to create team",
            )
            .await?;

        let id = TeamId::new(result.inserted_id()?);
        debug!(team_id = %id, "Inserted team row");

        Ok(team.into_team(id))
    }

    async fn get_all(&self) -> Result<Vec<Team>, DomainError> {
        let rows = self
            .store
            .fetch_all(sqlx::query("SELECT id, name FROM teams"), "Failed to list teams")
            .await?;

        rows.iter().map(row_to_team).collect()
    }

    async fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let row = self
            .store
            .fetch_optional(
                sqlx::query("SELECT id, name FROM teams WHERE id = ?").bind(id.value()),
                "Failed to get team",
            )
            .await?;

        row.as_ref().map(row_to_team).transpose()
    }

    async fn update(&self, id: TeamId, team: NewTeam) -> Result<Option<Team>, DomainError> {
        let result = self
            .store
            .execute(
                sqlx::query("UPDATE teams SET name = ? WHERE id = ?")
                    .bind(&team.name)
                    .bind(id.value()),
                "Failed to update team",
            )
            .await?;

        Ok(result.touched_any().then(|| team.into_team(id)))
    }

    async fn delete(&self, id: TeamId) -> Result<bool, DomainError> {
        let result = self
            .store
            .execute(
                sqlx::query("DELETE FROM teams WHERE id = ?").bind(id.value()),
                "Failed to delete team",
            )
            .await?;

        Ok(result.touched_any())
    }
}

fn row_to_team(row: &MySqlRow) -> Result<Team, DomainError> {
    let id: i64 = column(row, "id")?;
    let name: String = column(row, "name")?;

    Ok(Team::new(TeamId::new(id), name))
}
