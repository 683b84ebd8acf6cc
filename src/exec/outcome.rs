// src/exec/outcome.rs

//! Interpretation of dialog exit codes.
//!
//! The dialog program reports "user declined / nothing selected" through
//! exit code 1. That is not a failure, so it gets its own variant instead of
//! travelling through the error channel.

use crate::errors::{DialogError, Result};

/// Exit code the dialog program uses for cancel / "No" / nothing selected.
pub const DECLINED_EXIT_CODE: i32 = 1;

/// Result of a dialog that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Exit code 0; the payload is whatever the dialog produced.
    Success(T),
    /// Exit code 1.
    Declined,
}

impl<T> Outcome<T> {
    pub fn is_declined(&self) -> bool {
        matches!(self, Outcome::Declined)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Declined => Outcome::Declined,
        }
    }

    /// Success payload, or `None` when declined.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Declined => None,
        }
    }
}

impl<T: Default> Outcome<T> {
    /// Collapse `Declined` into `T::default()` (empty string, empty list).
    pub fn unwrap_or_default(self) -> T {
        self.success().unwrap_or_default()
    }
}

/// Raw termination report from a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Completion {
    pub fn exited(code: i32, stdout: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Classify the exit code, handing back the payload on success.
    ///
    /// - `0` → `Success(payload)`
    /// - `1` → `Declined`
    /// - anything else, including death by signal → `DialogError::ExitStatus`
    pub fn into_outcome<T>(self, payload: impl FnOnce(String) -> T) -> Result<Outcome<T>> {
        match self.code {
            Some(0) => Ok(Outcome::Success(payload(self.stdout))),
            Some(DECLINED_EXIT_CODE) => Ok(Outcome::Declined),
            code => Err(DialogError::ExitStatus {
                code,
                stderr: self.stderr.trim().to_string(),
            }),
        }
    }
}
