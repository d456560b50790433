//! Team endpoints

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiErrorResponse, Json, RecordId};
use crate::domain::driver::{Driver, DriverSummary};
use crate::domain::team::{NewTeam, Team, TeamId, TeamWithDrivers};

use super::drivers::DriverResponse;

const TEAM_NOT_FOUND: &str = "Team not found";

/// Body for creating or replacing a team
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({"name": "Red Bull Racing"}))]
pub struct TeamRequest {
    /// The name of the team.
    pub name: String,
}

impl From<TeamRequest> for NewTeam {
    fn from(request: TeamRequest) -> Self {
        NewTeam::new(request.name)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamResponse {
    /// The team ID.
    pub id: i64,
    /// The team name.
    pub name: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().value(),
            name: team.name().to_string(),
        }
    }
}

/// A driver as listed under its team
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamDriverResponse {
    /// The driver ID.
    pub id: i64,
    /// The driver name.
    pub name: String,
    /// Whether the driver is titular or reserve.
    pub is_titular: bool,
}

impl From<&DriverSummary> for TeamDriverResponse {
    fn from(driver: &DriverSummary) -> Self {
        Self {
            id: driver.id.value(),
            name: driver.name.clone(),
            is_titular: driver.is_titular,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamWithDriversResponse {
    /// The team ID.
    pub id: i64,
    /// The team name.
    pub name: String,
    pub drivers: Vec<TeamDriverResponse>,
}

impl From<&TeamWithDrivers> for TeamWithDriversResponse {
    fn from(view: &TeamWithDrivers) -> Self {
        Self {
            id: view.team().id().value(),
            name: view.team().name().to_string(),
            drivers: view.drivers().iter().map(TeamDriverResponse::from).collect(),
        }
    }
}

/// POST /teams
#[utoipa::path(
    post,
    path = "/teams",
    tag = "Teams",
    summary = "Create a new F1 team",
    request_body = TeamRequest,
    responses(
        (status = 201, description = "The created team.", body = TeamResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse)
    )
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<TeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    debug!(name = %request.name, "Creating team");

    let team = state.team_service.create_team(request.into()).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// GET /teams
#[utoipa::path(
    get,
    path = "/teams",
    tag = "Teams",
    summary = "Returns a list of all F1 teams with their drivers",
    responses(
        (status = 200, description = "A list of teams.", body = [TeamWithDriversResponse]),
        (status = 500, description = "Server error", body = ApiErrorResponse)
    )
)]
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamWithDriversResponse>>, ApiError> {
    debug!("Listing teams with drivers");

    let teams = state.team_service.get_all_teams_with_drivers().await?;

    Ok(Json(teams.iter().map(TeamWithDriversResponse::from).collect()))
}

/// GET /teams/{id}
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "Teams",
    summary = "Get an F1 team by ID",
    params(("id" = i64, Path, description = "The team ID.")),
    responses(
        (status = 200, description = "The team description by ID.", body = TeamResponse),
        (status = 404, description = "Team not found", body = ApiErrorResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse)
    )
)]
pub async fn get_team(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(team_id = ?id, "Getting team");

    let id = id.ok_or_else(|| ApiError::not_found(TEAM_NOT_FOUND))?;
    let team = state
        .team_service
        .get_team_by_id(TeamId::new(id))
        .await?
        .ok_or_else(|| ApiError::not_found(TEAM_NOT_FOUND))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// PUT /teams/{id}
#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = "Teams",
    summary = "Update an F1 team by ID",
    params(("id" = i64, Path, description = "The team ID.")),
    request_body = TeamRequest,
    responses(
        (status = 200, description = "The updated team.", body = TeamResponse),
        (status = 404, description = "Team not found", body = ApiErrorResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse)
    )
)]
pub async fn update_team(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Json(request): Json<TeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(team_id = ?id, "Updating team");

    let id = id.ok_or_else(|| ApiError::not_found(TEAM_NOT_FOUND))?;
    let team = state
        .team_service
        .update_team(TeamId::new(id), request.into())
        .await?
        .ok_or_else(|| ApiError::not_found(TEAM_NOT_FOUND))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// DELETE /teams/{id}
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = "Teams",
    summary = "Delete an F1 team by ID",
    params(("id" = i64, Path, description = "The team ID.")),
    responses(
        (status = 204, description = "Team deleted successfully."),
        (status = 404, description = "Team not found", body = ApiErrorResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse)
    )
)]
pub async fn delete_team(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode, ApiError> {
    debug!(team_id = ?id, "Deleting team");

    let id = id.ok_or_else(|| ApiError::not_found(TEAM_NOT_FOUND))?;

    if !state.team_service.delete_team(TeamId::new(id)).await? {
        return Err(ApiError::not_found(TEAM_NOT_FOUND));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /teams/{id}/drivers
///
/// Does not check that the team exists; an unknown team has no drivers.
#[utoipa::path(
    get,
    path = "/teams/{id}/drivers",
    tag = "Teams",
    summary = "List the drivers of an F1 team",
    params(("id" = i64, Path, description = "The team ID.")),
    responses(
        (status = 200, description = "The team's drivers.", body = [DriverResponse]),
        (status = 500, description = "Server error", body = ApiErrorResponse)
    )
)]
pub async fn list_team_drivers(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Vec<DriverResponse>>, ApiError> {
    debug!(team_id = ?id, "Listing team drivers");

    let drivers: Vec<Driver> = match id {
        Some(id) => {
            state
                .driver_service
                .get_drivers_by_team_id(TeamId::new(id))
                .await?
        }
        None => Vec::new(),
    };

    Ok(Json(drivers.iter().map(DriverResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::driver::DriverId;

    #[test]
    fn test_team_request_deserialization() {
        let request: TeamRequest = serde_json::from_str(r#"{"name": "Red Bull Racing"}"#).unwrap();
        assert_eq!(request.name, "Red Bull Racing");
    }

    #[test]
    fn test_team_request_requires_name() {
        assert!(serde_json::from_str::<TeamRequest>("{}").is_err());
    }

    #[test]
    fn test_team_with_drivers_response_shape() {
        let view = TeamWithDrivers::new(
            Team::new(TeamId::new(1), "Red Bull Racing"),
            vec![DriverSummary {
                id: DriverId::new(10),
                name: "Max Verstappen".to_string(),
                is_titular: true,
            }],
        );

        let json = serde_json::to_value(TeamWithDriversResponse::from(&view)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Red Bull Racing",
                "drivers": [{"id": 10, "name": "Max Verstappen", "is_titular": true}]
            })
        );
    }
}
