//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::driver::DriverService;
use crate::infrastructure::storage::Repositories;
use crate::infrastructure::team::TeamService;

/// Services shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub team_service: Arc<TeamService>,
    pub driver_service: Arc<DriverService>,
}

impl AppState {
    pub fn new(repositories: Repositories) -> Self {
        Self {
            team_service: Arc::new(TeamService::new(
                repositories.teams.clone(),
                repositories.drivers.clone(),
            )),
            driver_service: Arc::new(DriverService::new(repositories.drivers)),
        }
    }

    /// State over empty in-memory repositories
    pub fn in_memory() -> Self {
        Self::new(Repositories::in_memory())
    }
}
