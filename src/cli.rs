// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::dialogs::FileFilters;

/// Command-line arguments for `zdialog`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "zdialog",
    version,
    about = "Show desktop dialogs from scripts and print the answers.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Zdialog.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Dialog program name or path; overrides config and `ZDIALOG_PROGRAM`.
    #[arg(long, value_name = "PROGRAM", global = true)]
    pub program: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ZDIALOG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub dialog: DialogCommand,
}

/// One subcommand per dialog kind. Every dialog takes a prompt used as both
/// title and text.
#[derive(Debug, Clone, Subcommand)]
pub enum DialogCommand {
    /// Pick one option; prints it.
    List {
        prompt: String,
        #[arg(required = true)]
        options: Vec<String>,
    },
    /// Tick several options; prints one per line.
    Checklist {
        prompt: String,
        #[arg(required = true)]
        options: Vec<String>,
    },
    /// Ask for a line of text.
    Entry {
        prompt: String,
        #[arg(long, default_value = "")]
        placeholder: String,
    },
    /// Pick a date (YYYY-MM-DD start date, default today); prints MM/DD/YYYY.
    Calendar {
        prompt: String,
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
    Error {
        prompt: String,
    },
    Info {
        prompt: String,
    },
    Warning {
        prompt: String,
    },
    Notification {
        prompt: String,
    },
    /// Pick files; prints one per line.
    FileSelection {
        prompt: String,
        /// Filter as `NAME=PATTERN[,PATTERN...]`, repeatable.
        #[arg(long = "filter", value_name = "NAME=PATTERNS", value_parser = parse_filter)]
        filters: Vec<(String, Vec<String>)>,
    },
    /// Pick directories; prints one per line.
    DirectorySelection {
        prompt: String,
    },
    /// Progress bar fed with integers read line by line from stdin.
    Progress {
        prompt: String,
        #[arg(long)]
        pulsate: bool,
        #[arg(long)]
        no_cancel: bool,
    },
    /// Yes/no question; exit status 0 for yes, 1 for no.
    Question {
        prompt: String,
    },
    /// Slider; prints the value, or -1 for no answer.
    Scale {
        prompt: String,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        initial: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        min: i32,
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        max: i32,
        #[arg(long, default_value_t = 1)]
        step: i32,
        /// Print every intermediate value as the slider moves.
        #[arg(long)]
        partial: bool,
    },
    /// Show a file, inline text or URL; prints the (possibly edited) text.
    TextInfo {
        prompt: String,
        #[arg(long, value_name = "PATH")]
        filename: Option<PathBuf>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long, value_name = "LABEL")]
        checkbox: Option<String>,
        #[arg(long)]
        editable: bool,
    },
    /// Pick a color; prints e.g. `rgb(0,128,0)`.
    Color {
        prompt: String,
        /// Starting color; the program's own default when omitted.
        #[arg(long)]
        initial: Option<String>,
        #[arg(long)]
        palette: bool,
    },
    Password {
        prompt: String,
    },
    /// Prints the username and the password on separate lines.
    UsernamePassword {
        prompt: String,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse a `NAME=PAT[,PAT...]` file filter.
pub fn parse_filter(s: &str) -> Result<(String, Vec<String>), String> {
    let (name, patterns) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid filter '{s}' (expected NAME=PATTERN[,PATTERN...])"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("invalid filter '{s}': empty name"));
    }
    let patterns: Vec<String> = patterns
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if patterns.is_empty() {
        return Err(format!("invalid filter '{s}': no patterns"));
    }
    Ok((name.to_string(), patterns))
}

/// Collect parsed `--filter` values; later filters with the same name
/// replace earlier ones.
pub fn collect_filters(filters: &[(String, Vec<String>)]) -> FileFilters {
    filters.iter().cloned().collect()
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
