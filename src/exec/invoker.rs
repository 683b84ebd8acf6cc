// src/exec/invoker.rs

//! Builds requests against the resolved program and interprets how dialogs
//! terminate.

use tracing::debug;

use crate::config::WindowSection;
use crate::errors::Result;
use crate::exec::backend::DialogBackend;
use crate::exec::feeder::{FeedReceiver, FeedReport, FeedSender};
use crate::exec::outcome::Outcome;
use crate::exec::process::ProcessBackend;
use crate::program::Program;
use crate::request::{DialogKind, DialogRequest, RequestBuilder};

/// Runs dialog requests and maps exit codes onto [`Outcome`]s.
///
/// Holds no per-dialog state: every call owns its own subprocess, so one
/// invoker can serve concurrent dialogs.
#[derive(Debug, Clone)]
pub struct Invoker<B: DialogBackend = ProcessBackend> {
    program: Program,
    window: WindowSection,
    backend: B,
}

impl Invoker<ProcessBackend> {
    pub fn new(program: Program, window: WindowSection) -> Self {
        Self::with_backend(program, window, ProcessBackend::new())
    }
}

impl<B: DialogBackend> Invoker<B> {
    pub fn with_backend(program: Program, window: WindowSection, backend: B) -> Self {
        Self {
            program,
            window,
            backend,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Start a request for `kind`, with configured window options attached.
    pub fn request(&self, kind: DialogKind, prompt: &str) -> RequestBuilder {
        RequestBuilder::new(self.program.clone(), kind, prompt).window(&self.window)
    }

    /// Run a dialog and return its trimmed stdout.
    pub async fn run(&self, request: &DialogRequest) -> Result<Outcome<String>> {
        let outcome = self.capture(request, None).await?;
        Ok(outcome.map(|out| out.trim().to_string()))
    }

    /// Run a dialog, optionally writing `input` to its stdin, and return its
    /// stdout untouched.
    pub async fn capture(
        &self,
        request: &DialogRequest,
        input: Option<String>,
    ) -> Result<Outcome<String>> {
        let completion = self.backend.run(request, input).await?;
        completion.into_outcome(|stdout| stdout)
    }

    /// Run a yes/no dialog. Exit 0 is `true`, exit 1 is `false`.
    pub async fn run_question(&self, request: &DialogRequest) -> Result<bool> {
        let completion = self.backend.run(request, None).await?;
        let answer = !completion.into_outcome(|_| ())?.is_declined();
        debug!(answer, "question answered");
        Ok(answer)
    }

    /// Run a dialog that reads live values from `feed` on its stdin.
    pub async fn run_fed(
        &self,
        request: &DialogRequest,
        feed: FeedReceiver,
    ) -> Result<Outcome<FeedReport>> {
        let (completion, report) = self.backend.run_fed(request, feed).await?;
        completion.into_outcome(|_| report)
    }

    /// Run a dialog that prints live values, forwarding them to `sink`.
    ///
    /// The success payload is every value printed, in order.
    pub async fn run_partial(
        &self,
        request: &DialogRequest,
        sink: FeedSender,
    ) -> Result<Outcome<Vec<i32>>> {
        let (completion, report) = self.backend.run_partial(request, sink).await?;
        completion.into_outcome(|_| report.values)
    }
}
