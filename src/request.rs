// src/request.rs

//! Dialog requests: the argument vector for one dialog invocation.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use crate::config::WindowSection;
use crate::program::Program;

/// The fixed set of dialog templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    List,
    Checklist,
    Entry,
    Calendar,
    Error,
    Info,
    Warning,
    Notification,
    FileSelection,
    DirectorySelection,
    Progress,
    Question,
    Scale,
    TextInfo,
    ColorSelection,
    Password,
    UsernamePassword,
}

impl DialogKind {
    /// The flag selecting this dialog in the external program.
    pub fn flag(self) -> &'static str {
        match self {
            DialogKind::List | DialogKind::Checklist => "--list",
            DialogKind::Entry => "--entry",
            DialogKind::Calendar => "--calendar",
            DialogKind::Error => "--error",
            DialogKind::Info => "--info",
            DialogKind::Warning => "--warning",
            DialogKind::Notification => "--notification",
            DialogKind::FileSelection | DialogKind::DirectorySelection => "--file-selection",
            DialogKind::Progress => "--progress",
            DialogKind::Question => "--question",
            DialogKind::Scale => "--scale",
            DialogKind::TextInfo => "--text-info",
            DialogKind::ColorSelection => "--color-selection",
            DialogKind::Password | DialogKind::UsernamePassword => "--password",
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag().trim_start_matches("--"))
    }
}

/// An immutable, fully resolved command line: program path first, then
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    kind: DialogKind,
    program: Program,
    args: Vec<String>,
}

impl DialogRequest {
    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    pub fn program(&self) -> &Path {
        self.program.path()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Every token, program path included.
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(self.program.path().display().to_string())
            .chain(self.args.iter().cloned())
            .collect()
    }

    pub(crate) fn os_args(&self) -> impl Iterator<Item = &OsStr> {
        self.args.iter().map(OsStr::new)
    }
}

/// Builder for [`DialogRequest`].
///
/// Seeds `--title`/`--text` with the prompt and then the kind flag; dialog
/// specific options follow; window options from config are appended last.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    kind: DialogKind,
    program: Program,
    args: Vec<String>,
    window: Vec<String>,
}

impl RequestBuilder {
    pub fn new(program: Program, kind: DialogKind, prompt: &str) -> Self {
        let args = vec![
            "--title".to_string(),
            prompt.to_string(),
            "--text".to_string(),
            prompt.to_string(),
            kind.flag().to_string(),
        ];
        Self {
            kind,
            program,
            args,
            window: Vec::new(),
        }
    }

    /// Append a bare flag such as `--multiple`.
    pub fn flag(mut self, flag: &str) -> Self {
        self.args.push(flag.to_string());
        self
    }

    /// Append a flag followed by its value as a separate token.
    pub fn option(mut self, flag: &str, value: impl Into<String>) -> Self {
        self.args.push(flag.to_string());
        self.args.push(value.into());
        self
    }

    /// Append a `--flag=value` token.
    pub fn assign(mut self, flag: &str, value: impl fmt::Display) -> Self {
        self.args.push(format!("{flag}={value}"));
        self
    }

    /// Conditionally append a bare flag.
    pub fn flag_if(self, cond: bool, flag: &str) -> Self {
        if cond { self.flag(flag) } else { self }
    }

    /// Append free-standing values (list rows and similar).
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn window(mut self, window: &WindowSection) -> Self {
        self.window = window.to_args();
        self
    }

    pub fn build(self) -> DialogRequest {
        let mut args = self.args;
        args.extend(self.window);
        DialogRequest {
            kind: self.kind,
            program: self.program,
            args,
        }
    }
}
