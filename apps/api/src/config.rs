use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: Option<PostgresConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        // PostgreSQL is optional: without DATABASE_URL the API serves from
        // the in-memory repository.
        let database = if std::env::var("DATABASE_URL").is_ok() {
            Some(PostgresConfig::from_env()?)
        } else {
            None
        };

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}
