// src/program.rs

//! Resolution of the dialog executable.
//!
//! Lookup happens once, up front, and yields an immutable [`Program`] that is
//! handed to the invoker. Nothing consults `PATH` per dialog.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error};

use crate::config::ProgramSection;
use crate::errors::{DialogError, Result};

/// Exit code used when the dialog program is missing, as a shell would.
pub const PROGRAM_MISSING_EXIT: i32 = 127;

/// Resolved path of the dialog executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    path: Arc<Path>,
}

impl Program {
    /// Wrap an already-known path without checking it.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::from(path.into()),
        }
    }

    /// Resolve the program named by a `[program]` section.
    ///
    /// An explicit `path` must point at an existing executable. Otherwise
    /// `name` is looked up on `PATH`.
    pub fn resolve(section: &ProgramSection) -> Result<Self> {
        let target = match section.path {
            Some(ref path) => path.clone(),
            None => PathBuf::from(&section.name),
        };

        let found = which::which(&target).map_err(|source| DialogError::ProgramNotFound {
            name: target.display().to_string(),
            source,
        })?;
        debug!(requested = ?target, program = ?found, "resolved dialog program");
        Ok(Self::from_path(found))
    }

    /// Resolve the program or terminate the process.
    ///
    /// A missing dialog binary is a deployment problem: no dialog can ever be
    /// shown, so the process exits with [`PROGRAM_MISSING_EXIT`].
    pub fn resolve_or_abort(section: &ProgramSection) -> Self {
        match Self::resolve(section) {
            Ok(program) => program,
            Err(err) => {
                error!(error = %err, "dialog program unavailable; aborting");
                eprintln!("zdialog: {err}");
                std::process::exit(PROGRAM_MISSING_EXIT);
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
