// src/exec/feeder.rs

//! Relays live integer updates into a dialog's stdin.
//!
//! Progress dialogs read one decimal value per line until stdin closes. The
//! caller produces values over time on a [`FeedSender`]; a [`Feeder`] owns the
//! write end of the pipe and copies every value across, in order, until one of:
//!
//! - the caller closes the feed (every sender dropped): the pipe is shut down
//!   so the dialog sees EOF;
//! - the invoker reports that the dialog process exited;
//! - a write fails, normally a broken pipe because the dialog went away.
//!
//! The loop runs as its own Tokio task and hands back a [`FeedReport`] when
//! joined, so nothing is left running behind the caller's back.

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::errors::{DialogError, Result};

/// Producer side of a feed channel.
pub type FeedSender = mpsc::UnboundedSender<i32>;

/// Consumer side of a feed channel.
pub type FeedReceiver = mpsc::UnboundedReceiver<i32>;

/// Create an unbounded, ordered feed channel.
pub fn feed_channel() -> (FeedSender, FeedReceiver) {
    mpsc::unbounded_channel()
}

/// Why the feed loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedEnd {
    /// Every sender was dropped; the pipe was closed by us.
    ChannelClosed,
    /// The dialog process exited (or the feeder was abandoned) first.
    ProcessExited,
    /// Writing failed, usually because the reader end is gone.
    PipeClosed,
}

/// Summary returned by a finished feed loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedReport {
    /// Values successfully written, in order.
    pub written: usize,
    pub end: FeedEnd,
}

/// Handle on a running feed loop.
#[derive(Debug)]
pub struct Feeder {
    exited: Option<oneshot::Sender<()>>,
    handle: JoinHandle<FeedReport>,
}

impl Feeder {
    /// Start relaying `feed` into `writer`.
    ///
    /// `writer` must already be open; for a subprocess that means the child
    /// has been spawned with a piped stdin.
    pub fn spawn<W>(writer: W, feed: FeedReceiver) -> Self
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (exited_tx, exited_rx) = oneshot::channel();
        let handle = tokio::spawn(feed_loop(writer, feed, exited_rx));
        Self {
            exited: Some(exited_tx),
            handle,
        }
    }

    /// Wait for the loop to end on its own (feed closed or write failure).
    pub async fn join(mut self) -> Result<FeedReport> {
        // Dropping the sender would read as "process exited".
        let _exited = self.exited.take();
        await_report(self.handle).await
    }

    /// Report that the dialog process has exited, then wait for the loop.
    pub async fn finish(mut self) -> Result<FeedReport> {
        if let Some(tx) = self.exited.take() {
            let _ = tx.send(());
        }
        await_report(self.handle).await
    }
}

async fn await_report(handle: JoinHandle<FeedReport>) -> Result<FeedReport> {
    handle
        .await
        .map_err(|e| DialogError::Other(anyhow::anyhow!("feed task failed: {e}")))
}

async fn feed_loop<W>(
    mut writer: W,
    mut feed: FeedReceiver,
    mut exited: oneshot::Receiver<()>,
) -> FeedReport
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0usize;

    let end = loop {
        tokio::select! {
            biased;

            _ = &mut exited => break FeedEnd::ProcessExited,

            value = feed.recv() => match value {
                Some(v) => {
                    if let Err(e) = write_value(&mut writer, v).await {
                        if e.kind() == std::io::ErrorKind::BrokenPipe {
                            debug!(value = v, written, "dialog closed its input; stopping feed");
                        } else {
                            warn!(value = v, written, error = %e, "writing to dialog failed; stopping feed");
                        }
                        break FeedEnd::PipeClosed;
                    }
                    written += 1;
                    trace!(value = v, written, "fed value to dialog");
                }
                None => break FeedEnd::ChannelClosed,
            },
        }
    };

    if end == FeedEnd::ChannelClosed {
        if let Err(e) = writer.shutdown().await {
            debug!(error = %e, "closing dialog input failed; dialog already gone");
        }
    }
    drop(writer);

    debug!(written, end = ?end, "feed loop finished");
    FeedReport { written, end }
}

async fn write_value<W>(writer: &mut W, value: i32) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{value}\n").as_bytes()).await?;
    writer.flush().await
}
