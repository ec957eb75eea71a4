//! Application configuration.

use crate::error::{AppError, AppResult};
use rampart_strategy::plans::{DEFAULT_RUSH_THRESHOLD, DEFAULT_WAVE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Policy knobs, loadable from a toml file. Every field defaults so the
/// bot runs without any config file present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mobile-pool level required to trigger the rush sub-routine.
    #[serde(default = "default_rush_threshold")]
    pub rush_threshold: f64,
    /// Scouts spawned per rush wave.
    #[serde(default = "default_wave_size")]
    pub wave_size: u32,
}

fn default_rush_threshold() -> f64 {
    DEFAULT_RUSH_THRESHOLD
}

fn default_wave_size() -> u32 {
    DEFAULT_WAVE_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rush_threshold: default_rush_threshold(),
            wave_size: default_wave_size(),
        }
    }
}

impl AppConfig {
    /// Load from `path` when the file exists, otherwise fall back to the
    /// defaults with a warning.
    pub fn load(path: &str) -> AppResult<Self> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            tracing::warn!(path = %path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_policy() {
        let config = AppConfig::default();
        assert_eq!(config.rush_threshold, 10.0);
        assert_eq!(config.wave_size, 10);
    }

    #[test]
    fn partial_toml_keeps_unset_defaults() {
        let config: AppConfig = toml::from_str("rush_threshold = 12.0").unwrap();
        assert_eq!(config.rush_threshold, 12.0);
        assert_eq!(config.wave_size, 10);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("/nonexistent/rampart.toml").unwrap();
        assert_eq!(config.rush_threshold, 10.0);
    }
}
