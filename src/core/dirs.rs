use crate::core::error::MetaphorError;
use std::path::PathBuf;

const APP_DIR: &str = "metaphorever";

/// Overrides both the config and the data directory when set.
pub const HOME_ENV: &str = "METAPHOREVER_HOME";

fn home_override() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub fn get_config_directory() -> Result<PathBuf, MetaphorError> {
    if let Some(home) = home_override() {
        return Ok(home);
    }

    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|base| base.join(APP_DIR))
        .ok_or(MetaphorError::DirectoryNotFound { kind: "config" })
}

pub fn get_data_directory() -> Result<PathBuf, MetaphorError> {
    if let Some(home) = home_override() {
        return Ok(home.join("data"));
    }

    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local/share"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::data_dir(),
    };

    base.map(|base| base.join(APP_DIR).join("data"))
        .ok_or(MetaphorError::DirectoryNotFound { kind: "data" })
}
