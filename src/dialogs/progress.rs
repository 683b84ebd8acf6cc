// src/dialogs/progress.rs

use tracing::info;

use crate::dialogs::Dialogs;
use crate::errors::Result;
use crate::exec::{DialogBackend, FeedReceiver, FeedReport, Outcome};
use crate::request::DialogKind;

/// Flags for a progress dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressOptions {
    /// Close the dialog once 100 is received.
    pub auto_close: bool,
    /// Let the Cancel button kill the parent process.
    pub auto_kill: bool,
    /// Bouncing bar instead of a percentage.
    pub pulsate: bool,
    /// Hide the Cancel button.
    pub no_cancel: bool,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            auto_close: true,
            auto_kill: true,
            pulsate: false,
            no_cancel: false,
        }
    }
}

impl<B: DialogBackend> Dialogs<B> {
    /// Show a progress bar driven by `feed`, with default options.
    ///
    /// Every value sent on the feed is written to the dialog as a line, in
    /// order. Drop all senders to close the dialog's input. The call returns
    /// once the dialog has exited and the feed loop has been joined.
    pub async fn progress(&self, prompt: &str, feed: FeedReceiver) -> Result<Outcome<FeedReport>> {
        self.progress_with(prompt, ProgressOptions::default(), feed).await
    }

    pub async fn progress_with(
        &self,
        prompt: &str,
        options: ProgressOptions,
        feed: FeedReceiver,
    ) -> Result<Outcome<FeedReport>> {
        let request = self
            .invoker()
            .request(DialogKind::Progress, prompt)
            .flag_if(options.auto_close, "--auto-close")
            .flag_if(options.auto_kill, "--auto-kill")
            .flag_if(options.pulsate, "--pulsate")
            .flag_if(options.no_cancel, "--no-cancel")
            .build();

        let outcome = self.invoker().run_fed(&request, feed).await?;
        if let Outcome::Success(ref report) = outcome {
            info!(written = report.written, end = ?report.end, "progress dialog finished");
        }
        Ok(outcome)
    }
}
