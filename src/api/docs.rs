//! OpenAPI document generated from the endpoint annotations

use utoipa::OpenApi;

use super::types::Json;
use super::{drivers, teams};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "F1 Teams API",
        version = "1.0.0",
        description = "API for F1 teams and drivers"
    ),
    paths(
        teams::create_team,
        teams::list_teams,
        teams::get_team,
        teams::update_team,
        teams::delete_team,
        teams::list_team_drivers,
        drivers::create_driver,
        drivers::list_drivers,
        drivers::get_driver,
        drivers::update_driver,
        drivers::delete_driver,
    ),
    tags(
        (name = "Teams", description = "API for managing F1 teams"),
        (name = "Drivers", description = "API for managing F1 drivers")
    )
)]
pub struct ApiDoc;

/// GET /api-docs
pub async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
