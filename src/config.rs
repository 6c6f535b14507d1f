// Configuration loading module

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::constants;
use crate::core::ObserverConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    #[serde(default)]
    pub observer: ObserverSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig::default(),
            observer: ObserverSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
    pub status_bar: StatusBarConfigYaml,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            title: constants::APP_TITLE.to_string(),
            bindings: Vec::new(),
            status_bar: StatusBarConfigYaml {
                default_text: "Resize the terminal to feed the observer | q: quit".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
}

/// Observer tuning as it appears in config.yaml
///
/// Defaults come from the compiled config (build.rs), so a missing section
/// or missing keys behave exactly like the shipped YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct ObserverSettings {
    #[serde(default = "default_quiet_period_ms")]
    pub quiet_period_ms: u64,
    #[serde(default = "default_width")]
    pub default_width: f64,
    #[serde(default = "default_min_height")]
    pub min_height: f64,
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
}

impl Default for ObserverSettings {
    fn default() -> Self {
        Self {
            quiet_period_ms: default_quiet_period_ms(),
            default_width: default_width(),
            min_height: default_min_height(),
            poll_timeout_ms: default_poll_timeout_ms(),
        }
    }
}

impl ObserverSettings {
    /// Convert YAML settings into the observer's config
    pub fn to_observer_config(&self) -> ObserverConfig {
        ObserverConfig {
            quiet_period: Duration::from_millis(self.quiet_period_ms),
            default_width: self.default_width,
            min_height: self.min_height,
        }
    }
}

fn default_quiet_period_ms() -> u64 {
    constants::QUIET_PERIOD_MS
}

fn default_width() -> f64 {
    constants::DEFAULT_WIDTH
}

fn default_min_height() -> f64 {
    constants::MIN_HEIGHT
}

fn default_poll_timeout_ms() -> u64 {
    constants::POLL_TIMEOUT_MS
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = config_path.unwrap_or_else(|| {
        let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        default_path.push("src");
        default_path.push("config.yaml");
        default_path
    });

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: AppConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_compiled_config() {
        let settings = ObserverSettings::default();
        assert_eq!(settings.quiet_period_ms, constants::QUIET_PERIOD_MS);
        assert_eq!(settings.default_width, constants::DEFAULT_WIDTH);
        assert_eq!(settings.min_height, constants::MIN_HEIGHT);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
application:
  title: "Test"
  status_bar:
    default_text: "hello"
observer:
  quiet_period_ms: 75
  default_width: 640.0
  min_height: 48.0
  poll_timeout_ms: 200
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.application.title, "Test");
        assert_eq!(config.observer.quiet_period_ms, 75);
        assert_eq!(config.observer.default_width, 640.0);

        let observer_config = config.observer.to_observer_config();
        assert_eq!(observer_config.quiet_period, Duration::from_millis(75));
        assert_eq!(observer_config.min_height, 48.0);
    }

    #[test]
    fn test_missing_observer_section_uses_defaults() {
        let yaml = r#"
application:
  title: "Test"
  status_bar:
    default_text: "hello"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.observer.quiet_period_ms, constants::QUIET_PERIOD_MS);
    }
}
