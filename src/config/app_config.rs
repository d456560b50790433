use serde::Deserialize;

use crate::infrastructure::storage::{MySqlConfig, StorageConfig, StorageType};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageSettings,
    pub database: DatabaseConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// `mysql` or `memory`
    pub backend: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    /// Create missing tables before serving
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "mysql".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let pool = MySqlConfig::default();

        Self {
            url: pool.url,
            max_connections: pool.max_connections,
            min_connections: pool.min_connections,
            connect_timeout_secs: pool.connect_timeout_secs,
            idle_timeout_secs: pool.idle_timeout_secs,
            run_migrations: true,
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl DatabaseConfig {
    pub fn to_mysql_config(&self) -> MySqlConfig {
        MySqlConfig::new(&self.url)
            .with_max_connections(self.max_connections)
            .with_min_connections(self.min_connections)
            .with_connect_timeout(self.connect_timeout_secs)
            .with_idle_timeout(self.idle_timeout_secs)
    }
}

/// `APP__SERVER__PORT`, `APP__DATABASE__URL`, ...
fn environment() -> config::Environment {
    config::Environment::with_prefix("APP")
        .separator("__")
        .try_parsing(true)
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and the environment
    ///
    /// `APP__*` variables use `__` as the section separator. The bare `PORT`
    /// and `DATABASE_URL` variables are honored as well and win over both.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment())
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Resolve the storage section into a backend configuration
    pub fn storage_config(&self) -> Result<StorageConfig, crate::domain::DomainError> {
        match self.storage.backend.parse::<StorageType>()? {
            StorageType::InMemory => Ok(StorageConfig::in_memory()),
            StorageType::MySql => Ok(StorageConfig::mysql(
                self.database.to_mysql_config(),
                self.database.run_migrations,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.storage.backend, "mysql");
        assert!(config.database.run_migrations);
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"server": {"port": 8080}, "storage": {"backend": "memory"}}"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(
            config.storage_config().unwrap().storage_type(),
            StorageType::InMemory
        );
    }

    #[test]
    fn test_mysql_storage_config() {
        let mut config = AppConfig::default();
        config.database.url = "mysql://f1@db/f1".to_string();
        config.database.max_connections = 4;

        match config.storage_config().unwrap() {
            StorageConfig::MySql {
                config,
                run_migrations,
            } => {
                assert_eq!(config.url, "mysql://f1@db/f1");
                assert_eq!(config.max_connections, 4);
                assert!(run_migrations);
            }
            StorageConfig::InMemory => panic!("Expected MySQL config"),
        }
    }

    #[test]
    fn test_environment_variable_names() {
        let vars = config::Map::from([
            ("APP__SERVER__PORT".to_string(), "8080".to_string()),
            ("APP__DATABASE__URL".to_string(), "mysql://f1@db/f1".to_string()),
            ("APP__STORAGE__BACKEND".to_string(), "memory".to_string()),
        ]);

        let config: AppConfig = config::Config::builder()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "mysql://f1@db/f1");
        assert_eq!(config.storage.backend, "memory");
    }

    #[test]
    fn test_unknown_backend() {
        let mut config = AppConfig::default();
        config.storage.backend = "redis".to_string();

        assert!(config.storage_config().is_err());
    }
}
