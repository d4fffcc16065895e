use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides the config directory (tests, sandboxes).
pub const ENV_CONFIG_DIR: &str = "PEACH_CONFIG_DIR";

/// Base peach config directory (~/.config/peach/ on Unix-likes)
pub fn peach() -> Result<PathBuf> {
    if let Ok(dir) = env::var(ENV_CONFIG_DIR) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_io(
                "APPDATA environment variable not set on Windows",
                Some("resolve config dir".to_string()),
            )
        })?;
        Ok(PathBuf::from(appdata).join("peach"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_io(
                "HOME environment variable not set on Unix-like system",
                Some("resolve config dir".to_string()),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("peach"))
    }
}

/// Global peach.json config file path
pub fn peach_json() -> Result<PathBuf> {
    Ok(peach()?.join("peach.json"))
}
