use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Logging settings for the command-line front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter level; `RUST_LOG` takes precedence when set
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LogSettings {
    /// Parse `level` as a tracing filter (`off`, `error` ... `trace`)
    pub fn level_filter(&self) -> ConfigResult<LevelFilter> {
        LevelFilter::from_str(self.level.trim()).map_err(|_| {
            ConfigError::Validation(format!(
                "Unknown log level '{}' (expected off, error, warn, info, debug or trace)",
                self.level
            ))
        })
    }
}
