// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [program]
/// name = "zenity"
///
/// [window]
/// width = 400
/// ok_label = "Go"
/// ```
///
/// Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub program: ProgramSection,

    #[serde(default)]
    pub window: WindowSection,
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`
/// (see `validate.rs`) or `Default`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub program: ProgramSection,
    pub window: WindowSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(program: ProgramSection, window: WindowSection) -> Self {
        Self { program, window }
    }
}

/// `[program]` section: which dialog executable to run.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramSection {
    /// Executable name looked up on `PATH`.
    #[serde(default = "default_program_name")]
    pub name: String,

    /// Explicit path. Takes precedence over `name` when set.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_program_name() -> String {
    "zenity".to_string()
}

impl Default for ProgramSection {
    fn default() -> Self {
        Self {
            name: default_program_name(),
            path: None,
        }
    }
}

/// `[window]` section: options appended to every dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSection {
    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,

    /// Icon name (`info`, `warning`, ...) or path to an image.
    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub modal: bool,

    #[serde(default)]
    pub ok_label: Option<String>,

    #[serde(default)]
    pub cancel_label: Option<String>,
}

impl WindowSection {
    /// Render the section as dialog arguments, in a fixed order.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(w) = self.width {
            args.push(format!("--width={w}"));
        }
        if let Some(h) = self.height {
            args.push(format!("--height={h}"));
        }
        if let Some(ref icon) = self.icon {
            args.push(format!("--window-icon={icon}"));
        }
        if self.modal {
            args.push("--modal".to_string());
        }
        if let Some(ref label) = self.ok_label {
            args.push(format!("--ok-label={label}"));
        }
        if let Some(ref label) = self.cancel_label {
            args.push(format!("--cancel-label={label}"));
        }
        args
    }
}
