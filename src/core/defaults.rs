use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::chance::Ratio;
use crate::error::{Error, Result};
use crate::path::DEFAULT_SEPARATOR;
use crate::paths;
use crate::utils::io;

/// Root configuration structure for peach.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeachConfig {
    /// Segment separator used by `PathUtil::from_config`.
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Extra named ratios registered on top of the built-in table.
    #[serde(default)]
    pub probabilities: BTreeMap<String, Ratio>,
}

impl Default for PeachConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            probabilities: BTreeMap::new(),
        }
    }
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load the full peach.json config, falling back to defaults on any error.
pub fn load_config() -> PeachConfig {
    let Ok(path) = paths::peach_json() else {
        return PeachConfig::default();
    };

    if !path.exists() {
        return PeachConfig::default();
    }

    load_config_from(&path).unwrap_or_else(|err| {
        log_status!(
            "config",
            "Ignoring {}: {}; using built-in defaults",
            path.display(),
            err
        );
        PeachConfig::default()
    })
}

/// Load config from an explicit file, reporting every failure.
pub fn load_config_from(path: &Path) -> Result<PeachConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    let config: PeachConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    if config.separator == '.' {
        return Err(Error::config_invalid_value(
            "separator",
            Some(config.separator.to_string()),
            "Separator cannot be the extension delimiter",
        ));
    }

    Ok(config)
}

/// Save config to peach.json (creates the directory if missing).
pub fn save_config(config: &PeachConfig) -> Result<()> {
    save_config_to(&paths::peach_json()?, config)
}

/// Save config to an explicit file, atomically.
pub fn save_config_to(path: &Path, config: &PeachConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize peach.json".to_string()))
    })?;

    io::write_file_atomic(path, &content, &format!("write {}", path.display()))
}

/// Check if peach.json file exists
pub fn config_exists() -> bool {
    paths::peach_json().map(|p| p.exists()).unwrap_or(false)
}

/// Delete peach.json file (reset to defaults)
pub fn reset_config() -> Result<bool> {
    let path = paths::peach_json()?;

    if path.exists() {
        std::fs::remove_file(&path).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to peach.json (for display purposes)
pub fn config_path() -> Result<String> {
    Ok(paths::peach_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> PeachConfig {
    PeachConfig::default()
}
