// File: crates/earnings/src/config.rs
// Summary: Dashboard configuration.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

use crate::error::ConfigError;
use crate::renderer::SeriesPreset;
use crate::source::GeneratorConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    /// UI theme flag; `"light"` selects the light palette, anything else dark.
    pub theme: String,
    /// Artificial latency of the simulated API, in milliseconds.
    pub delay_ms: u64,
    pub variant: SeriesPreset,
    /// Seed for reproducible data; random when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub profit_min: u32,
    pub profit_span: u32,
    pub new_users_max: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let generator = GeneratorConfig::default();
        Self {
            theme: "light".to_string(),
            delay_ms: 750,
            variant: SeriesPreset::Earnings,
            seed: None,
            profit_min: generator.profit_min,
            profit_span: generator.profit_span,
            new_users_max: generator.new_users_max,
            width: 1024,
            height: 640,
        }
    }
}

impl DashboardConfig {
    /// Loads configuration from a JSON file at the given path. Missing fields take defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: DashboardConfig = serde_json::from_slice(&buf)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason: &str| Err(ConfigError::Invalid { field, reason: reason.to_string() });
        if self.profit_span == 0 {
            return invalid("profitSpan", "must be greater than zero");
        }
        if self.profit_min.checked_add(self.profit_span).is_none() {
            return invalid("profitSpan", "profitMin + profitSpan overflows");
        }
        if self.new_users_max == 0 {
            return invalid("newUsersMax", "must be greater than zero");
        }
        if self.width == 0 || self.height == 0 {
            return invalid("width", "width and height must be non-zero");
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return invalid("width", "width and height must fit a surface");
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            profit_min: self.profit_min,
            profit_span: self.profit_span,
            new_users_max: self.new_users_max,
            include_new_users: self.variant.needs_new_users(),
        }
    }
}
