// src/dialogs/mod.rs

//! Caller-facing dialog functions.
//!
//! [`Dialogs`] wraps an [`Invoker`] and exposes one async method per dialog
//! kind, grouped by file:
//! - [`messages`]: error, info, warning, notification, question
//! - [`entry`]: text entry, password, username + password
//! - [`list`]: single-choice list, checklist
//! - [`calendar`], [`color`]
//! - [`files`]: file and directory selection
//! - [`progress`], [`scale`]: the streaming dialogs
//! - [`text_info`]: text viewer / editor with pre-flight validation
//! - [`parse`]: output decoding shared by the above
//!
//! Dialogs that can be dismissed without an answer (exit code 1) return an
//! empty value rather than an error, except `question`, which returns
//! `false`. Use the invoker directly to tell "declined" from "empty".

pub mod calendar;
pub mod color;
pub mod entry;
pub mod files;
pub mod list;
pub mod messages;
pub mod parse;
pub mod progress;
pub mod scale;
pub mod text_info;

use crate::config::{ConfigFile, WindowSection};
use crate::errors::Result;
use crate::exec::{DialogBackend, Invoker, ProcessBackend};
use crate::program::Program;

pub use entry::Credentials;
pub use files::FileFilters;
pub use progress::ProgressOptions;
pub use scale::ScaleArgs;
pub use text_info::TextInfoArgs;

/// Entry point for showing dialogs.
#[derive(Debug, Clone)]
pub struct Dialogs<B: DialogBackend = ProcessBackend> {
    invoker: Invoker<B>,
}

impl Dialogs<ProcessBackend> {
    pub fn new(program: Program, window: WindowSection) -> Self {
        Self::with_invoker(Invoker::new(program, window))
    }

    /// Resolve the configured program and build a real dialog front end.
    pub fn from_config(cfg: &ConfigFile) -> Result<Self> {
        let program = Program::resolve(&cfg.program)?;
        Ok(Self::new(program, cfg.window.clone()))
    }

    /// Like [`Dialogs::from_config`], but a missing program terminates the
    /// process (see [`Program::resolve_or_abort`]).
    pub fn from_config_or_abort(cfg: &ConfigFile) -> Self {
        Self::new(Program::resolve_or_abort(&cfg.program), cfg.window.clone())
    }
}

impl<B: DialogBackend> Dialogs<B> {
    pub fn with_invoker(invoker: Invoker<B>) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &Invoker<B> {
        &self.invoker
    }
}
