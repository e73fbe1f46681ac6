// Configuration module for hdlpad
// This module handles loading and parsing configuration from ~/.config/hdlpad/config.toml

pub mod completion_types;
mod types;

pub use completion_types::CompletionConfig;
pub use types::{Config, EditorConfig, Language};

use std::fs;
use std::path::PathBuf;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/hdlpad/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    log::debug!("Loading config from {:?}", config_path);

    if !config_path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    parse_config(&contents)
}

/// Parses config file contents, falling back to defaults with a warning
pub fn parse_config(contents: &str) -> ConfigResult {
    match toml::from_str::<Config>(contents) {
        Ok(mut config) => {
            let warning = sanitize(&mut config);
            ConfigResult { config, warning }
        }
        Err(e) => {
            log::error!("Failed to parse config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Replaces values that parse but cannot be used
///
/// Also applied after command-line overrides.
pub fn sanitize(config: &mut Config) -> Option<String> {
    if config.completion.cache_size == 0 {
        config.completion.cache_size = completion_types::DEFAULT_CACHE_SIZE;
        return Some(format!(
            "completion.cache_size must be at least 1, using {}",
            completion_types::DEFAULT_CACHE_SIZE
        ));
    }
    None
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/hdlpad/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("hdlpad")
        .join("config.toml")
}
