// src/exec/partial.rs

//! Reader for dialogs that print values while they are still open
//! (`--scale --print-partial`).

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::exec::feeder::FeedSender;

/// Everything a partial reader saw on stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialReport {
    /// Parsed values, in the order printed.
    pub values: Vec<i32>,
    /// Raw stdout text.
    pub raw: String,
}

/// Spawn a task that parses each stdout line as an integer and forwards it to
/// `sink`.
///
/// Lines that do not parse are logged and skipped. If the receiving side of
/// `sink` is dropped, forwarding stops but the stream is still drained so the
/// dialog never blocks on a full pipe.
pub fn spawn_partial_reader<R>(stdout: R, sink: FeedSender) -> JoinHandle<PartialReport>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(stdout);
        let mut report = PartialReport::default();
        let mut forwarding = true;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "reading partial output failed");
                    break;
                }
            }

            // Lossy: a non-UTF-8 line is skipped like any other bad line.
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            report.raw.push_str(line);
            report.raw.push('\n');

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let value = match trimmed.parse::<i32>() {
                Ok(v) => v,
                Err(e) => {
                    warn!(line = %trimmed, error = %e, "ignoring non-integer partial output");
                    continue;
                }
            };

            debug!(value, "partial value from dialog");
            report.values.push(value);

            if forwarding && sink.send(value).is_err() {
                debug!("partial value receiver dropped; no longer forwarding");
                forwarding = false;
            }
        }

        debug!(count = report.values.len(), "partial reader finished");
        report
    })
}
