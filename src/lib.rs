// src/lib.rs

//! Typed access to desktop dialogs through the `zenity` program.
//!
//! ```no_run
//! # async fn demo() -> zdialog::errors::Result<()> {
//! use zdialog::config::ConfigFile;
//! use zdialog::dialogs::Dialogs;
//!
//! let dialogs = Dialogs::from_config(&ConfigFile::default())?;
//! if dialogs.question("Deploy now?").await? {
//!     let (tx, rx) = zdialog::exec::feed_channel();
//!     tokio::spawn(async move {
//!         for pct in (0..=100).step_by(10) {
//!             let _ = tx.send(pct);
//!         }
//!     });
//!     dialogs.progress("Deploying", rx).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod dialogs;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod program;
pub mod request;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::cli::{CliArgs, DialogCommand, collect_filters};
use crate::config::{PROGRAM_ENV, apply_program_override, load_or_default};
use crate::dialogs::{Dialogs, ProgressOptions, ScaleArgs, TextInfoArgs};
use crate::exec::{DialogBackend, FeedSender, feed_channel};

/// Exit status for a "no" answer to `question`, matching the dialog program.
pub const EXIT_NO: i32 = 1;

/// High-level entry point used by `main.rs`.
///
/// Loads config, resolves the dialog program (exiting with 127 if it is
/// missing), shows the requested dialog and prints its answer. Returns the
/// process exit status.
pub async fn run(args: CliArgs) -> Result<i32> {
    let mut cfg = load_or_default(args.config.as_deref()).context("loading config")?;

    if let Ok(value) = std::env::var(PROGRAM_ENV) {
        debug!(%value, "program override from environment");
        apply_program_override(&mut cfg, &value);
    }
    if let Some(ref value) = args.program {
        apply_program_override(&mut cfg, value);
    }

    let dialogs = Dialogs::from_config_or_abort(&cfg);
    run_dialog(&dialogs, args.dialog).await
}

/// Show one dialog described by a CLI subcommand and print the result.
pub async fn run_dialog<B: DialogBackend>(dialogs: &Dialogs<B>, command: DialogCommand) -> Result<i32> {
    match command {
        DialogCommand::List { prompt, options } => {
            println!("{}", dialogs.list(&prompt, &options).await?);
        }
        DialogCommand::Checklist { prompt, options } => {
            print_lines(&dialogs.checklist(&prompt, &options).await?);
        }
        DialogCommand::Entry {
            prompt,
            placeholder,
        } => {
            println!("{}", dialogs.entry(&prompt, &placeholder).await?);
        }
        DialogCommand::Calendar { prompt, date } => {
            let initial = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            println!("{}", dialogs.calendar(&prompt, initial).await?);
        }
        DialogCommand::Error { prompt } => dialogs.error(&prompt).await?,
        DialogCommand::Info { prompt } => dialogs.info(&prompt).await?,
        DialogCommand::Warning { prompt } => dialogs.warning(&prompt).await?,
        DialogCommand::Notification { prompt } => dialogs.notification(&prompt).await?,
        DialogCommand::FileSelection { prompt, filters } => {
            let filters = collect_filters(&filters);
            print_lines(&dialogs.file_selection(&prompt, &filters).await?);
        }
        DialogCommand::DirectorySelection { prompt } => {
            print_lines(&dialogs.directory_selection(&prompt).await?);
        }
        DialogCommand::Progress {
            prompt,
            pulsate,
            no_cancel,
        } => {
            let options = ProgressOptions {
                pulsate,
                no_cancel,
                ..ProgressOptions::default()
            };
            let (tx, rx) = feed_channel();
            let relay = tokio::spawn(relay_stdin(tx));
            let outcome = dialogs.progress_with(&prompt, options, rx).await?;
            relay.abort();
            if outcome.is_declined() {
                return Ok(EXIT_NO);
            }
        }
        DialogCommand::Question { prompt } => {
            if !dialogs.question(&prompt).await? {
                return Ok(EXIT_NO);
            }
        }
        DialogCommand::Scale {
            prompt,
            initial,
            min,
            max,
            step,
            partial,
        } => {
            let mut args = ScaleArgs {
                initial,
                step,
                min,
                max,
                partial: None,
            };
            let printer = if partial {
                let (tx, mut rx) = feed_channel();
                args.partial = Some(tx);
                Some(tokio::spawn(async move {
                    let mut printed = 0usize;
                    while let Some(v) = rx.recv().await {
                        println!("{v}");
                        printed += 1;
                    }
                    printed
                }))
            } else {
                None
            };

            let value = dialogs.scale(&prompt, args).await?;
            let printed = match printer {
                Some(printer) => printer.await.context("partial value printer")?,
                None => 0,
            };
            // Partial values already include the final one.
            if printed == 0 {
                println!("{value}");
            }
        }
        DialogCommand::TextInfo {
            prompt,
            filename,
            text,
            url,
            checkbox,
            editable,
        } => {
            let args = TextInfoArgs {
                checkbox,
                editable,
                filename,
                text,
                url,
            };
            print!("{}", dialogs.text_info(&prompt, &args).await?);
        }
        DialogCommand::Color {
            prompt,
            initial,
            palette,
        } => {
            println!("{}", dialogs.color_selection(&prompt, initial.as_deref(), palette).await?);
        }
        DialogCommand::Password { prompt } => {
            println!("{}", dialogs.password(&prompt).await?);
        }
        DialogCommand::UsernamePassword { prompt } => {
            let creds = dialogs.username_and_password(&prompt).await?;
            println!("{}", creds.username);
            println!("{}", creds.password);
        }
    }
    Ok(0)
}

fn print_lines(items: &[String]) {
    for item in items {
        println!("{item}");
    }
}

/// Forward integers read line by line from our stdin into a progress feed.
/// Ends (closing the feed) at EOF.
async fn relay_stdin(tx: FeedSender) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.parse::<i32>() {
            Ok(v) => {
                if tx.send(v).is_err() {
                    break;
                }
            }
            Err(e) => warn!(line = %trimmed, error = %e, "ignoring non-integer progress input"),
        }
    }
    debug!("progress input reached EOF");
}
