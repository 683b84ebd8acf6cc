// src/config/mod.rs

//! Configuration for zdialog.
//!
//! - `model.rs`: the TOML-backed data model.
//! - `loader.rs`: reading a config file from disk, env overrides.
//! - `validate.rs`: turning a raw model into a checked `ConfigFile`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    DEFAULT_CONFIG_FILE, PROGRAM_ENV, apply_program_override, default_config_path,
    load_and_validate, load_from_path, load_or_default,
};
pub use model::{ConfigFile, ProgramSection, RawConfigFile, WindowSection};
