//! Per-field validators run against the assembled settings draft.
//!
//! Each validator checks one resolved value and either passes it through
//! untouched or fails with a descriptive message.

use std::path::Path;

/// Accepted log level names, compared case-insensitively.
pub(super) const LOG_LEVELS: [&str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

/// The trimmed value must be non-empty; the stored value is not trimmed.
pub(super) fn app_name_not_empty(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("app_name must not be empty".to_string());
    }
    Ok(())
}

/// The upper-cased value must name a known log level.
pub(super) fn log_level_known(value: &str) -> Result<(), String> {
    if !LOG_LEVELS.contains(&value.to_ascii_uppercase().as_str()) {
        return Err(format!("log_level must be one of {}", LOG_LEVELS.join(", ")));
    }
    Ok(())
}

/// The path must exist on disk at validation time.
pub(super) fn path_exists(value: &Path) -> Result<(), String> {
    if !value.exists() {
        return Err(format!("{} does not exist", value.display()));
    }
    Ok(())
}
