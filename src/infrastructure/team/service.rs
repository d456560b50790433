//! Team service: CRUD pass-through plus the teams-with-drivers view

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::driver::{DriverRepository, DriverSummary};
use crate::domain::team::{NewTeam, Team, TeamId, TeamRepository, TeamWithDrivers};
use crate::domain::DomainError;

/// Team service for managing teams
#[derive(Debug, Clone)]
pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
    drivers: Arc<dyn DriverRepository>,
}

impl TeamService {
    pub fn new(teams: Arc<dyn TeamRepository>, drivers: Arc<dyn DriverRepository>) -> Self {
        Self { teams, drivers }
    }

    /// Create a new team
    pub async fn create_team(&self, team: NewTeam) -> Result<Team, DomainError> {
        info!(name = %team.name, "Creating team");
        self.teams.create(team).await
    }

    /// Every team with its drivers nested under `drivers`
    ///
    /// Reads both tables in full and filters drivers per team, so the cost is
    /// teams x drivers. Drivers pointing at a missing team are not listed.
    pub async fn get_all_teams_with_drivers(&self) -> Result<Vec<TeamWithDrivers>, DomainError> {
        let teams = self.teams.get_all().await?;
        let drivers = self.drivers.get_all().await?;

        debug!(
            teams = teams.len(),
            drivers = drivers.len(),
            "Nesting drivers under teams"
        );

        Ok(teams
            .into_iter()
            .map(|team| {
                let roster = drivers
                    .iter()
                    .filter(|driver| driver.team_id() == team.id())
                    .map(DriverSummary::from)
                    .collect();

                TeamWithDrivers::new(team, roster)
            })
            .collect())
    }

    /// Get a team by ID
    pub async fn get_team_by_id(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        self.teams.find_by_id(id).await
    }

    /// Replace a team's fields
    pub async fn update_team(
        &self,
        id: TeamId,
        team: NewTeam,
    ) -> Result<Option<Team>, DomainError> {
        info!(team_id = %id, "Updating team");
        self.teams.update(id, team).await
    }

    /// Delete a team. Its drivers are left in place.
    pub async fn delete_team(&self, id: TeamId) -> Result<bool, DomainError> {
        info!(team_id = %id, "Deleting team");
        self.teams.delete(id).await
    }
}
