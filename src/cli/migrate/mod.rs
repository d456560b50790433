//! Migrate command - creates the teams and drivers tables

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::storage::{run_schema_migrations, RecordStore};

/// Apply pending migrations against `database.url`
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging)?;

    let store = RecordStore::connect(&config.database.to_mysql_config()).await?;
    let applied = run_schema_migrations(&store).await?;

    info!(applied, "Migrations finished");

    Ok(())
}
