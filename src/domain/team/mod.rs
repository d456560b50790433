//! Team domain module
//!
//! A team owns no drivers in storage; drivers point at a team through
//! `team_id` and are only nested under it on read.

mod entity;
mod repository;

pub use entity::{NewTeam, Team, TeamId, TeamWithDrivers};
pub use repository::TeamRepository;
