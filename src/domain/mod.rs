//! Domain layer - Teams, drivers and the repository contracts over them

pub mod driver;
pub mod error;
pub mod team;

pub use driver::{Driver, DriverId, DriverRepository, DriverSummary, NewDriver, TitularFlag};
pub use error::DomainError;
pub use team::{NewTeam, Team, TeamId, TeamRepository, TeamWithDrivers};
