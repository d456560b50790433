//! Driver domain module

mod entity;
mod repository;

pub use entity::{Driver, DriverId, DriverSummary, NewDriver, TitularFlag};
pub use repository::DriverRepository;
