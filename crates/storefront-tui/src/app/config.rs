//! TUI configuration
//!
//! Loads display and timing preferences. User and session state is never
//! written here; the profile switches reset every launch.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_core::SPLASH_DELAY_MS;

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "storefront";

/// TUI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// How long the splash screen stays up
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,

    /// UI tick interval (animations, toast expiry, clock)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Use the high-contrast palette
    #[serde(default)]
    pub high_contrast: bool,

    /// Log filter directive used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_splash_delay_ms() -> u64 {
    SPLASH_DELAY_MS
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_filter() -> String {
    "storefront_tui=info".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: default_splash_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            high_contrast: false,
            log_filter: default_log_filter(),
        }
    }
}

impl StorefrontConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        match Self::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let config_file = Self::config_file_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&config_file)?;
        Ok(config_file)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    /// Tick interval, never below 10ms
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.splash_delay(), Duration::from_millis(3000));
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert!(!config.high_contrast);
        assert_eq!(config.log_filter, "storefront_tui=info");
    }

    #[test]
    fn test_config_serialization() {
        let config = StorefrontConfig {
            splash_delay_ms: 500,
            tick_rate_ms: 50,
            high_contrast: true,
            log_filter: "debug".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: StorefrontConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: StorefrontConfig = serde_json::from_str(r#"{"high_contrast": true}"#).unwrap();
        assert!(parsed.high_contrast);
        assert_eq!(parsed.splash_delay_ms, 3000);
        assert_eq!(parsed.tick_rate_ms, 100);
    }

    #[test]
    fn test_tick_rate_floor() {
        let config = StorefrontConfig {
            tick_rate_ms: 0,
            ..StorefrontConfig::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = StorefrontConfig {
            splash_delay_ms: 1200,
            ..StorefrontConfig::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(StorefrontConfig::load_from(&path), config);
    }

    #[test]
    fn test_missing_or_broken_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(StorefrontConfig::load_from(&missing), StorefrontConfig::default());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert_eq!(StorefrontConfig::load_from(&broken), StorefrontConfig::default());
    }
}
