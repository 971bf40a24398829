use std::env;
use std::path::PathBuf;

pub const SETTINGS_PATH_VAR: &str = "LAST_TRICK_SETTINGS";
pub const ASSETS_DIR_VAR: &str = "LAST_TRICK_ASSETS";
pub const LOG_FORMAT_VAR: &str = "LAST_TRICK_LOG_FORMAT";

pub const DEFAULT_SETTINGS_PATH: &str = "last-trick-settings.json";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Log output format for `telemetry::init_tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Settings file location (defaults to `last-trick-settings.json`)
pub fn settings_path() -> PathBuf {
    PathBuf::from(var_or(SETTINGS_PATH_VAR, DEFAULT_SETTINGS_PATH))
}

/// Asset base directory (defaults to `assets`)
pub fn assets_dir() -> PathBuf {
    PathBuf::from(var_or(ASSETS_DIR_VAR, DEFAULT_ASSETS_DIR))
}

pub fn log_format() -> LogFormat {
    parse_log_format(env::var(LOG_FORMAT_VAR).ok().as_deref())
}

fn parse_log_format(raw: Option<&str>) -> LogFormat {
    match raw.map(|s| s.trim().to_ascii_lowercase()) {
        Some(s) if s == "json" => LogFormat::Json,
        _ => LogFormat::Compact,
    }
}

/// Environment variable, or `default` when unset or blank.
fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
