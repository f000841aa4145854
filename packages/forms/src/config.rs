use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Fully-qualified origin used to absolutize download links.
    pub base_url: String,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("base_url", "http://localhost:3000")?
            .set_default("database.url", "postgres://localhost/formwork")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., FORMWORK__BASE_URL)
            .add_source(Environment::with_prefix("FORMWORK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_falls_back_to_defaults() {
        let cfg = AppConfig::load().unwrap();
        assert!(!cfg.base_url.is_empty());
        assert!(!cfg.database.url.is_empty());
    }
}
