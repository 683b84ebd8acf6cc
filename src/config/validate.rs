// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DialogError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = DialogError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.program, raw.window))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_program(cfg)?;
    validate_window(cfg)?;
    Ok(())
}

fn validate_program(cfg: &RawConfigFile) -> Result<()> {
    if cfg.program.path.is_none() && cfg.program.name.trim().is_empty() {
        return Err(DialogError::ConfigError(
            "[program].name must not be empty".to_string(),
        ));
    }
    if let Some(ref path) = cfg.program.path {
        if path.as_os_str().is_empty() {
            return Err(DialogError::ConfigError(
                "[program].path must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_window(cfg: &RawConfigFile) -> Result<()> {
    let window = &cfg.window;

    for (key, value) in [("width", window.width), ("height", window.height)] {
        if value == Some(0) {
            return Err(DialogError::ConfigError(format!(
                "[window].{key} must be >= 1 (got 0)"
            )));
        }
    }

    for (key, value) in [
        ("icon", &window.icon),
        ("ok_label", &window.ok_label),
        ("cancel_label", &window.cancel_label),
    ] {
        if matches!(value, Some(s) if s.trim().is_empty()) {
            return Err(DialogError::ConfigError(format!(
                "[window].{key} must not be empty when set"
            )));
        }
    }

    Ok(())
}
