//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Environment variables with this prefix override file values,
/// e.g. `CLASSIFIER_DATABASE_URL`.
pub const ENV_PREFIX: &str = "CLASSIFIER";

#[derive(Clone, Debug, Deserialize)]
/// Settings for reaching the reference-data store.
pub struct ClassifierConfig {
    pub database_url: String,
    pub pool_size: u32,
}

impl ClassifierConfig {
    /// Load defaults, then the optional YAML file at `path`, then the
    /// environment (after reading `.env` if present).
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("database_url", "app.db")?
            .set_default("pool_size", 4)?
            .add_source(File::new(path, FileFormat::Yaml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }
}
