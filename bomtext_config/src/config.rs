use crate::error::ConfigResult;
use crate::settings::LogSettings;
use bomtext_fs::{Encoding, FileTextConfig, ProbePolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for bomtext
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text file access settings
    pub text: FileTextConfig,
    /// Logging settings
    pub log: LogSettings,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load configuration from TOML string
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        let toml_content = self.to_toml_string()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml_content)?;
        Ok(())
    }

    /// Export configuration as TOML string
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get configuration file search paths
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // User-specific config
        if let Some(home) = std::env::var_os("HOME") {
            paths.push(PathBuf::from(&home).join(".bomtext").join("config.toml"));
            paths.push(PathBuf::from(&home).join(".config").join("bomtext").join("config.toml"));
        }

        // Current directory
        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(current_dir.join("bomtext.toml"));
        }

        paths
    }

    /// Load configuration with automatic path discovery
    pub fn load() -> ConfigResult<Self> {
        Self::load_with_paths(&Self::config_paths())
    }

    /// Load configuration with custom search paths
    pub fn load_with_paths(paths: &[PathBuf]) -> ConfigResult<Self> {
        for path in paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        // Return default configuration if no config file found
        Ok(Self::default())
    }

    /// Create a new configuration file with default settings
    pub fn create_default_config(path: &Path) -> ConfigResult<()> {
        Self::default().save_to_file(path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.log.level_filter()?;
        Ok(())
    }

    /// Settings handed to text file sessions
    pub fn text_config(&self) -> FileTextConfig {
        self.text
    }
}

/// Configuration builder for creating custom configurations
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut FileTextConfig),
    {
        f(&mut self.config.text);
        self
    }

    pub fn default_encoding(mut self, encoding: Encoding) -> Self {
        self.config.text.default_encoding = encoding;
        self
    }

    pub fn keep_existing_bom(mut self, keep: bool) -> Self {
        self.config.text.keep_existing_bom = keep;
        self
    }

    pub fn probe_policy(mut self, policy: ProbePolicy) -> Self {
        self.config.text.probe_policy = policy;
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log.level = level.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.text.default_encoding, Encoding::Utf8);
        assert!(config.text.keep_existing_bom);
        assert_eq!(config.text.probe_policy, ProbePolicy::Fail);
        assert_eq!(config.log.level, "info");
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_full_file() {
        let config = Config::from_toml_str(
            r#"
            [text]
            default_encoding = "iso-8859-1"
            keep_existing_bom = false
            probe_policy = "use-default"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.text.default_encoding, Encoding::Latin1);
        assert!(!config.text.keep_existing_bom);
        assert_eq!(config.text.probe_policy, ProbePolicy::UseDefault);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str("[text]\ndefault_encoding = \"UTF-16LE\"\n").unwrap();
        assert_eq!(config.text.default_encoding, Encoding::Utf16Le);
        assert!(config.text.keep_existing_bom);
        assert_eq!(config.log, LogSettings::default());

        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Config::from_toml_str("[text]\ndefault_encoding = \"EBCDIC\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));

        let err = Config::from_toml_str("[text]\nprobe_policy = \"retry\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));

        let err = Config::from_toml_str("[log]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_toml_string_round_trips() {
        let config = ConfigBuilder::new()
            .default_encoding(Encoding::Utf32Be)
            .probe_policy(ProbePolicy::UseDefault)
            .log_level("warn")
            .build();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("default_encoding = \"UTF-32BE\""));
        assert!(text.contains("probe_policy = \"use-default\""));
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_save_and_load_with_paths() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let saved = dir.path().join("nested").join("bomtext.toml");

        assert_eq!(
            Config::load_with_paths(&[missing.clone()]).unwrap(),
            Config::default()
        );

        let config = ConfigBuilder::new()
            .text(|text| text.keep_existing_bom = false)
            .build();
        config.save_to_file(&saved).unwrap();

        let loaded = Config::load_with_paths(&[missing, saved]).unwrap();
        assert_eq!(loaded, config);
        assert!(!loaded.text_config().keep_existing_bom);
    }

    #[test]
    fn test_create_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::create_default_config(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_config_paths_end_with_local_file() {
        let paths = Config::config_paths();
        assert!(paths.last().is_some_and(|p| p.ends_with("bomtext.toml")));
    }
}
