//! Storage infrastructure - the record store and its in-memory stand-in

mod factory;
mod in_memory;
pub mod migrations;
mod mysql;

pub use factory::{Repositories, StorageConfig, StorageFactory, StorageType};
pub use in_memory::InMemoryTable;
pub use migrations::{run_schema_migrations, Migration, SchemaMigrator};
pub use mysql::{column, MutationResult, MySqlConfig, RecordStore, Statement};
