//! Team infrastructure implementations

mod in_memory;
mod mysql_repository;
mod service;

pub use in_memory::InMemoryTeamRepository;
pub use mysql_repository::MySqlTeamRepository;
pub use service::TeamService;
