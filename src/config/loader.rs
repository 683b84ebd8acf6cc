// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Config file looked for in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "Zdialog.toml";

/// Environment override for the dialog program (name or path).
pub const PROGRAM_ENV: &str = "ZDIALOG_PROGRAM";

/// Read and deserialize a config file without semantic validation.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Read, deserialize and validate a config file.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load the named config, or the default one if it exists.
///
/// An explicitly named file must exist; a missing default file just means
/// built-in defaults.
pub fn load_or_default(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_and_validate(path),
        None => {
            let path = default_config_path();
            if path.is_file() {
                load_and_validate(&path)
            } else {
                debug!(path = ?path, "no config file; using defaults");
                Ok(ConfigFile::default())
            }
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Apply a program override (from the CLI or `ZDIALOG_PROGRAM`).
///
/// Values containing a path separator are treated as paths, anything else as
/// a name to look up on `PATH`.
pub fn apply_program_override(cfg: &mut ConfigFile, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    if value.contains(std::path::MAIN_SEPARATOR) || value.contains('/') {
        cfg.program.path = Some(PathBuf::from(value));
    } else {
        cfg.program.name = value.to_string();
        cfg.program.path = None;
    }
}
