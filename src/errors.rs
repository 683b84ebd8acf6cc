// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DialogError {
    #[error("dialog program '{name}' not found")]
    ProgramNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("one of filename, text or URL needs to be supplied")]
    MissingTextSource,

    #[error("only one of filename, text and URL can be supplied")]
    ConflictingTextSources,

    #[error("cannot use {path:?}: {source}")]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dialog exited with {}: {stderr}", describe_code(*.code))]
    ExitStatus { code: Option<i32>, stderr: String },

    #[error("unexpected dialog output {output:?}: {reason}")]
    InvalidOutput { output: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DialogError {
    /// Exit code of the dialog process, when the error came from one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            DialogError::ExitStatus { code, .. } => *code,
            _ => None,
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "no status (killed by signal)".to_string(),
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DialogError>;
