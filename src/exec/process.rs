// src/exec/process.rs

//! Real backend: one OS process per dialog.

use std::process::{ExitStatus, Stdio};

use anyhow::anyhow;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::errors::{DialogError, Result};
use crate::exec::backend::{BackendFuture, DialogBackend};
use crate::exec::feeder::{FeedReceiver, FeedReport, FeedSender, Feeder};
use crate::exec::outcome::Completion;
use crate::exec::partial::{PartialReport, spawn_partial_reader};
use crate::request::DialogRequest;

/// Spawns the dialog program with `tokio::process`.
///
/// Children are spawned with `kill_on_drop`, so dropping an in-flight dialog
/// future kills and reaps the process.
#[derive(Debug, Clone, Default)]
pub struct ProcessBackend;

impl ProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DialogBackend for ProcessBackend {
    fn run<'a>(
        &'a self,
        request: &'a DialogRequest,
        input: Option<String>,
    ) -> BackendFuture<'a, Completion> {
        Box::pin(run_captured(request, input))
    }

    fn run_fed<'a>(
        &'a self,
        request: &'a DialogRequest,
        feed: FeedReceiver,
    ) -> BackendFuture<'a, (Completion, FeedReport)> {
        Box::pin(run_fed(request, feed))
    }

    fn run_partial<'a>(
        &'a self,
        request: &'a DialogRequest,
        sink: FeedSender,
    ) -> BackendFuture<'a, (Completion, PartialReport)> {
        Box::pin(run_partial(request, sink))
    }
}

fn spawn_dialog(request: &DialogRequest, stdin: Stdio) -> Result<Child> {
    info!(
        kind = %request.kind(),
        program = ?request.program(),
        args = ?request.args(),
        "starting dialog process"
    );

    let mut cmd = Command::new(request.program());
    cmd.args(request.os_args())
        .stdin(stdin)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    cmd.spawn().map_err(|source| DialogError::Spawn {
        program: request.program().to_path_buf(),
        source,
    })
}

async fn run_captured(request: &DialogRequest, input: Option<String>) -> Result<Completion> {
    let stdin = if input.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    };
    let mut child = spawn_dialog(request, stdin)?;

    let writer = match input {
        Some(text) => {
            let mut pipe = take_pipe(child.stdin.take(), "stdin")?;
            Some(tokio::spawn(async move {
                if let Err(e) = pipe.write_all(text.as_bytes()).await {
                    debug!(error = %e, "dialog stopped reading its input early");
                }
                // Dropping `pipe` closes the dialog's stdin.
            }))
        }
        None => None,
    };

    let stdout = spawn_collector(take_pipe(child.stdout.take(), "stdout")?);
    let stderr = spawn_stderr_logger(take_pipe(child.stderr.take(), "stderr")?);

    let status = child.wait().await?;
    log_exit(request, status);

    if let Some(writer) = writer {
        if let Err(e) = writer.await {
            warn!(error = %e, "dialog input writer task failed");
        }
    }

    Ok(Completion {
        code: status.code(),
        stdout: join_text(stdout).await?,
        stderr: join_text(stderr).await?,
    })
}

async fn run_fed(request: &DialogRequest, feed: FeedReceiver) -> Result<(Completion, FeedReport)> {
    let mut child = spawn_dialog(request, Stdio::piped())?;

    let feeder = Feeder::spawn(take_pipe(child.stdin.take(), "stdin")?, feed);
    let stdout = spawn_collector(take_pipe(child.stdout.take(), "stdout")?);
    let stderr = spawn_stderr_logger(take_pipe(child.stderr.take(), "stderr")?);

    let status = child.wait().await?;
    log_exit(request, status);

    let report = feeder.finish().await?;
    debug!(written = report.written, end = ?report.end, "feeder joined");

    let completion = Completion {
        code: status.code(),
        stdout: join_text(stdout).await?,
        stderr: join_text(stderr).await?,
    };
    Ok((completion, report))
}

async fn run_partial(
    request: &DialogRequest,
    sink: FeedSender,
) -> Result<(Completion, PartialReport)> {
    let mut child = spawn_dialog(request, Stdio::null())?;

    let reader = spawn_partial_reader(take_pipe(child.stdout.take(), "stdout")?, sink);
    let stderr = spawn_stderr_logger(take_pipe(child.stderr.take(), "stderr")?);

    let status = child.wait().await?;
    log_exit(request, status);

    let report = reader
        .await
        .map_err(|e| DialogError::Other(anyhow!("partial reader failed: {e}")))?;

    let completion = Completion {
        code: status.code(),
        stdout: report.raw.clone(),
        stderr: join_text(stderr).await?,
    };
    Ok((completion, report))
}

fn take_pipe<T>(pipe: Option<T>, name: &str) -> Result<T> {
    pipe.ok_or_else(|| DialogError::Other(anyhow!("dialog {name} was not piped")))
}

fn log_exit(request: &DialogRequest, status: ExitStatus) {
    info!(
        kind = %request.kind(),
        exit_code = ?status.code(),
        success = status.success(),
        "dialog process exited"
    );
}

fn spawn_collector<R>(pipe: R) -> JoinHandle<std::io::Result<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut pipe = pipe;
        let mut bytes = Vec::new();
        pipe.read_to_end(&mut bytes).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    })
}

/// Always consume stderr so the buffer can't fill; log lines at debug.
fn spawn_stderr_logger<R>(pipe: R) -> JoinHandle<std::io::Result<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(pipe);
        let mut text = String::new();
        let mut line = Vec::new();
        while reader.read_until(b'\n', &mut line).await? > 0 {
            let decoded = String::from_utf8_lossy(&line);
            debug!("dialog stderr: {}", decoded.trim_end());
            text.push_str(&decoded);
            line.clear();
        }
        Ok(text)
    })
}

async fn join_text(handle: JoinHandle<std::io::Result<String>>) -> Result<String> {
    let text = handle
        .await
        .map_err(|e| DialogError::Other(anyhow!("output reader failed: {e}")))??;
    Ok(text)
}
