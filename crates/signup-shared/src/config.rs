//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::*;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub cors: CorsSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub name: String,
    pub users_collection: String,
    pub max_pool_size: u32,
    pub connect_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    /// `json` or `pretty`
    pub format: String,
}

impl AppConfig {
    /// Loads `.env`, then layers defaults, `config/default`, `config/{APP_ENV}`
    /// and `__`-separated environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::from_dir("config", &env)
    }

    pub fn from_dir(dir: &str, env: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", DEFAULT_HOST)?
            .set_default("app.port", i64::from(DEFAULT_PORT))?
            .set_default("app.name", DEFAULT_APP_NAME)?
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .set_default("database.name", DEFAULT_DATABASE_NAME)?
            .set_default("database.users_collection", DEFAULT_USERS_COLLECTION)?
            .set_default("database.max_pool_size", i64::from(DEFAULT_MAX_POOL_SIZE))?
            .set_default("database.connect_timeout_seconds", DEFAULT_CONNECT_TIMEOUT_SECONDS as i64)?
            .set_default("cors.allowed_origins", vec![DEFAULT_ALLOWED_ORIGIN])?
            .set_default("log.level", "info")?
            .set_default("log.format", "json")?
            .add_source(File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", dir, env)).required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
