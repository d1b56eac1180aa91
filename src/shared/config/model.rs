use serde::Deserialize;

use crate::shared::config::CONFIG;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub trends: Option<TrendsConfig>,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

/// Tuning knobs for the trend-aggregation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TrendsConfig {
    /// Cap on concurrently computed entities per run (default 10)
    pub max_concurrent_entities: Option<usize>,
}

impl TrendsConfig {
    /// Create from application configuration
    pub fn from_app_config() -> Self {
        CONFIG.trends.clone().unwrap_or_default()
    }
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("TRENDB_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
