// src/exec/backend.rs

//! Pluggable dialog backend.
//!
//! The invoker talks to a `DialogBackend` instead of spawning processes
//! itself. Production code uses [`ProcessBackend`](super::ProcessBackend);
//! tests can provide an implementation that answers from a script without
//! touching the OS.
//!
//! Backends only *run* requests and report raw completions. Exit-code
//! interpretation lives in the invoker.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::exec::feeder::{FeedReceiver, FeedReport, FeedSender};
use crate::exec::outcome::Completion;
use crate::exec::partial::PartialReport;
use crate::request::DialogRequest;

/// Boxed future returned by backend methods.
pub type BackendFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

pub trait DialogBackend: Send + Sync {
    /// Run a dialog to completion and capture its output.
    ///
    /// When `input` is given it is written to the dialog's stdin, which is
    /// then closed.
    fn run<'a>(
        &'a self,
        request: &'a DialogRequest,
        input: Option<String>,
    ) -> BackendFuture<'a, Completion>;

    /// Run a dialog while relaying `feed` into its stdin.
    fn run_fed<'a>(
        &'a self,
        request: &'a DialogRequest,
        feed: FeedReceiver,
    ) -> BackendFuture<'a, (Completion, FeedReport)>;

    /// Run a dialog whose stdout carries integer updates, forwarding each to
    /// `sink` as it arrives.
    fn run_partial<'a>(
        &'a self,
        request: &'a DialogRequest,
        sink: FeedSender,
    ) -> BackendFuture<'a, (Completion, PartialReport)>;
}
