//! Driver infrastructure implementations

mod in_memory;
mod mysql_repository;
mod service;

pub use in_memory::InMemoryDriverRepository;
pub use mysql_repository::MySqlDriverRepository;
pub use service::DriverService;
