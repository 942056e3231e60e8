use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 300;

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub sources: Vec<SourceConfig>,
    pub update_interval_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                SourceConfig {
                    name: "HEB".into(),
                    url: "https://www.heb.com.mx/".into(),
                },
                SourceConfig {
                    name: "Soriana".into(),
                    url: "https://www.soriana.com/".into(),
                },
                SourceConfig {
                    name: "Walmart".into(),
                    url: "https://www.walmart.com.mx/".into(),
                },
            ],
            update_interval_seconds: DEFAULT_UPDATE_INTERVAL_SECS,
        }
    }
}

impl AppConfig {
    /// Loads the config file if present, otherwise falls back to the
    /// built-in Nuevo León chain list.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        let config = if Path::new(path).exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// A zero interval would spin the poll loop; reject it up front
    /// instead of handing it to the sleep timer.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.update_interval_seconds == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(())
    }
}
