//! Driver endpoints

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiErrorResponse, Json, RecordId};
use crate::domain::driver::{Driver, DriverId, NewDriver, TitularFlag};
use crate::domain::team::TeamId;

const DRIVER_NOT_FOUND: &str = "Driver not found";

/// `is_titular` on the direct driver endpoints: echoed in the form it was
/// submitted or stored in, a boolean or an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TitularValue {
    Bool(bool),
    Stored(i64),
}

impl Default for TitularValue {
    fn default() -> Self {
        Self::Bool(false)
    }
}

impl From<TitularValue> for TitularFlag {
    fn from(value: TitularValue) -> Self {
        match value {
            TitularValue::Bool(flag) => TitularFlag::Bool(flag),
            TitularValue::Stored(value) => TitularFlag::Stored(value),
        }
    }
}

impl From<TitularFlag> for TitularValue {
    fn from(flag: TitularFlag) -> Self {
        match flag {
            TitularFlag::Bool(flag) => TitularValue::Bool(flag),
            TitularFlag::Stored(value) => TitularValue::Stored(value),
        }
    }
}

/// Body for creating or replacing a driver
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({"name": "Max Verstappen", "team_id": 1, "is_titular": true}))]
pub struct DriverRequest {
    /// The name of the driver.
    pub name: String,
    /// The ID of the team the driver belongs to.
    pub team_id: i64,
    /// Whether the driver is titular or reserve.
    #[serde(default)]
    pub is_titular: TitularValue,
}

impl From<DriverRequest> for NewDriver {
    fn from(request: DriverRequest) -> Self {
        NewDriver::new(
            request.name,
            TeamId::new(request.team_id),
            TitularFlag::from(request.is_titular),
        )
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DriverResponse {
    /// The driver ID.
    pub id: i64,
    /// The driver name.
    pub name: String,
    /// The ID of the team the driver belongs to.
    pub team_id: i64,
    /// Whether the driver is titular or reserve.
    pub is_titular: TitularValue,
}

impl From<&Driver> for DriverResponse {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id().value(),
            name: driver.name().to_string(),
            team_id: driver.team_id().value(),
            is_titular: driver.titular().into(),
        }
    }
}

/// POST /drivers
#[utoipa::path(
    post,
    path = "/drivers",
    tag = "Drivers",
    summary = "Create a new F1 driver",
    request_body = DriverRequest,
    responses(
        (status = 201, description = "The created driver.", body = DriverResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse)
    )
)]
pub async fn create_driver(
    State(state): State<AppState>,
    Json(request): Json<DriverRequest>,
) -> Result<(StatusCode, Json<DriverResponse>), ApiError> {
    debug!(name = %request.name, team_id = request.team_id, "Creating driver");

    let driver = state.driver_service.create_driver(request.into()).await?;

    Ok((StatusCode::CREATED, Json(DriverResponse::from(&driver))))
}

/// GET /drivers
#[utoipa::path(
    get,
    path = "/drivers",
    tag = "Drivers",
    summary = "Returns a list of all F1 drivers",
    responses(
        (status = 200, description = "A list of drivers.", body = [DriverResponse]),
        (status = 500, description = "Server error", body = ApiErrorResponse)
    )
)]
pub async fn list_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverResponse>>, ApiError> {
    debug!("Listing drivers");

    let drivers = state.driver_service.get_all_drivers().await?;

    Ok(Json(drivers.iter().map(DriverResponse::from).collect()))
}

/// GET /drivers/{id}
#[utoipa::path(
    get,
    path = "/drivers/{id}",
    tag = "Drivers",
    summary = "Get an F1 driver by ID",
    params(("id" = i64, Path, description = "The driver ID.")),
    responses(
        (status = 200, description = "The driver description by ID.", body = DriverResponse),
        (status = 404, description = "Driver not found", body = ApiErrorResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse)
    )
)]
pub async fn get_driver(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<DriverResponse>, ApiError> {
    debug!(driver_id = ?id, "Getting driver");

    let id = id.ok_or_else(|| ApiError::not_found(DRIVER_NOT_FOUND))?;
    let driver = state
        .driver_service
        .get_driver_by_id(DriverId::new(id))
        .await?
        .ok_or_else(|| ApiError::not_found(DRIVER_NOT_FOUND))?;

    Ok(Json(DriverResponse::from(&driver)))
}

/// PUT /drivers/{id}
#[utoipa::path(
    put,
    path = "/drivers/{id}",
    tag = "Drivers",
    summary = "Update an F1 driver by ID",
    params(("id" = i64, Path, description = "The driver ID.")),
    request_body = DriverRequest,
    responses(
        (status = 200, description = "The updated driver.", body = DriverResponse),
        (status = 404, description = "Driver not found", body = ApiErrorResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse)
    )
)]
pub async fn update_driver(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Json(request): Json<DriverRequest>,
) -> Result<Json<DriverResponse>, ApiError> {
    debug!(driver_id = ?id, "Updating driver");

    let id = id.ok_or_else(|| ApiError::not_found(DRIVER_NOT_FOUND))?;
    let driver = state
        .driver_service
        .update_driver(DriverId::new(id), request.into())
        .await?
        .ok_or_else(|| ApiError::not_found(DRIVER_NOT_FOUND))?;

    Ok(Json(DriverResponse::from(&driver)))
}

/// DELETE /drivers/{id}
#[utoipa::path(
    delete,
    path = "/drivers/{id}",
    tag = "Drivers",
    summary = "Delete an F1 driver by ID",
    params(("id" = i64, Path, description = "The driver ID.")),
    responses(
        (status = 204, description = "Driver deleted successfully."),
        (status = 404, description = "Driver not found", body = ApiErrorResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse)
    )
)]
pub async fn delete_driver(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode, ApiError> {
    debug!(driver_id = ?id, "Deleting driver");

    let id = id.ok_or_else(|| ApiError::not_found(DRIVER_NOT_FOUND))?;

    if !state.driver_service.delete_driver(DriverId::new(id)).await? {
        return Err(ApiError::not_found(DRIVER_NOT_FOUND));
    }

    Ok(StatusCode::NO_CONTENT)
}
