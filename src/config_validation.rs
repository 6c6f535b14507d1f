// Configuration validation module

use std::path::PathBuf;

use anyhow::{ensure, Result};

use crate::config::{load_config, AppConfig};

/// Load and validate configuration with error recovery
///
/// A missing or unreadable file falls back to the compiled-in defaults; a
/// file that loads but fails validation is a hard error so a broken config
/// is never silently papered over.
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = config_path.unwrap_or_else(|| {
        let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        default_path.push("src");
        default_path.push("config.yaml");
        default_path
    });

    let config = match load_config(Some(path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load configuration: {e:#}");
            eprintln!("Using default configuration");
            AppConfig::default()
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Validate observer settings
fn validate(config: &AppConfig) -> Result<()> {
    let observer = &config.observer;
    ensure!(
        observer.quiet_period_ms > 0,
        "observer.quiet_period_ms must be greater than zero"
    );
    ensure!(
        observer.default_width > 0.0,
        "observer.default_width must be greater than zero"
    );
    ensure!(
        observer.min_height > 0.0,
        "observer.min_height must be greater than zero"
    );
    ensure!(
        observer.poll_timeout_ms > 0,
        "observer.poll_timeout_ms must be greater than zero"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_quiet_period_rejected() {
        let mut config = AppConfig::default();
        config.observer.quiet_period_ms = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            load_and_validate_config(Some(PathBuf::from("/nonexistent/config.yaml"))).unwrap();
        assert_eq!(config.observer.quiet_period_ms, crate::constants::QUIET_PERIOD_MS);
    }
}
