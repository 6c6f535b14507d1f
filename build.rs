// Build script - reads config.yaml at compile time and generates defaults
// This allows changing observer defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        // Fallback defaults if config.yaml doesn't exist
        CompiledConfig::default()
    };

    // Generate Rust code with the compiled-in values
    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const QUIET_PERIOD_MS: u64 = {quiet_period_ms};
pub const DEFAULT_WIDTH: f64 = {default_width:?};
pub const MIN_HEIGHT: f64 = {min_height:?};
pub const POLL_TIMEOUT_MS: u64 = {poll_timeout_ms};
pub const APP_TITLE: &str = "{app_title}";
"#,
        quiet_period_ms = config.quiet_period_ms,
        default_width = config.default_width,
        min_height = config.min_height,
        poll_timeout_ms = config.poll_timeout_ms,
        app_title = config.app_title,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    quiet_period_ms: u64,
    default_width: f64,
    min_height: f64,
    poll_timeout_ms: u64,
    app_title: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            quiet_period_ms: 50,
            default_width: 300.0,
            min_height: 60.0,
            poll_timeout_ms: 100,
            app_title: "Size Observer".to_string(),
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_observer = false;
    let mut in_application = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Track which section we're in
        if trimmed.starts_with("observer:") {
            in_observer = true;
            in_application = false;
            continue;
        } else if trimmed.starts_with("application:") {
            in_observer = false;
            in_application = true;
            continue;
        } else if !line.starts_with(' ') && trimmed.ends_with(':') {
            in_observer = false;
            in_application = false;
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            if in_observer {
                match key {
                    "quiet_period_ms" => config.quiet_period_ms = value.parse().unwrap_or(50),
                    "default_width" => config.default_width = value.parse().unwrap_or(300.0),
                    "min_height" => config.min_height = value.parse().unwrap_or(60.0),
                    "poll_timeout_ms" => config.poll_timeout_ms = value.parse().unwrap_or(100),
                    _ => {}
                }
            } else if in_application {
                if key == "title" {
                    config.app_title = value.trim_matches('"').to_string();
                }
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let line = line.split('#').next().unwrap_or("");
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}
