use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. Empty allows any origin.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    /// Preflight cache lifetime in seconds.
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// JSON document the collection is seeded from at startup.
    pub seed_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("MOVIES_CONFIG").unwrap_or_else(|_| "config/config".to_string());
        let port = std::env::var("PORT").ok();

        Self::builder(&config_path, port)?.build()?.try_deserialize()
    }

    fn builder(
        config_path: &str,
        port: Option<String>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 1234)?
            .set_default("server.body_limit", 64 * 1024)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("store.seed_path", "data/movies.json")?
            .set_default("log.level", "info")?
            // Load from config/config.toml (or MOVIES_CONFIG)
            .add_source(File::with_name(config_path).required(false))
            // Override from environment (e.g., MOVIES__SERVER__HOST)
            .add_source(Environment::with_prefix("MOVIES").separator("__"))
            // The plain PORT variable wins over everything else
            .set_override_option("server.port", port)
    }
}
