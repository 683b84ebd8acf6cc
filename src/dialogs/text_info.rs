// src/dialogs/text_info.rs

use std::path::PathBuf;

use crate::dialogs::Dialogs;
use crate::errors::{DialogError, Result};
use crate::exec::DialogBackend;
use crate::request::DialogKind;

/// Options for a text-info dialog.
///
/// Exactly one of `filename`, `text` and `url` must be supplied. Empty
/// strings count as not supplied.
#[derive(Debug, Clone, Default)]
pub struct TextInfoArgs {
    /// Label of an "I agree"-style checkbox that must be ticked to continue.
    pub checkbox: Option<String>,
    pub editable: bool,
    pub filename: Option<PathBuf>,
    /// Inline text, written to the dialog's stdin.
    pub text: Option<String>,
    /// Page to render as HTML.
    pub url: Option<String>,
}

impl TextInfoArgs {
    /// Validate the options and render them as arguments.
    ///
    /// Runs before anything is spawned. A named file must exist now.
    pub fn parse(&self) -> Result<Vec<String>> {
        let mut args = Vec::new();

        if let Some(label) = non_empty(self.checkbox.as_deref()) {
            args.push("--checkbox".to_string());
            args.push(label.to_string());
        }
        if self.editable {
            args.push("--editable".to_string());
        }

        let filename = self
            .filename
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty());
        let text = non_empty(self.text.as_deref());
        let url = non_empty(self.url.as_deref());

        let supplied = [filename.is_some(), text.is_some(), url.is_some()]
            .into_iter()
            .filter(|s| *s)
            .count();
        match supplied {
            0 => return Err(DialogError::MissingTextSource),
            1 => {}
            _ => return Err(DialogError::ConflictingTextSources),
        }

        if let Some(path) = filename {
            std::fs::metadata(path).map_err(|source| DialogError::FileUnavailable {
                path: path.clone(),
                source,
            })?;
            args.push("--filename".to_string());
            args.push(path.display().to_string());
        }

        if let Some(url) = url {
            args.push("--html".to_string());
            args.push("--url".to_string());
            args.push(url.to_string());
        }

        Ok(args)
    }

    /// Inline text to feed on stdin, if any.
    fn stdin_text(&self) -> Option<String> {
        non_empty(self.text.as_deref()).map(str::to_string)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

impl<B: DialogBackend> Dialogs<B> {
    /// Show (and optionally edit) a text, file or web page.
    ///
    /// The result is the dialog's raw output, not trimmed, since it is user
    /// content when `editable` is set.
    pub async fn text_info(&self, prompt: &str, args: &TextInfoArgs) -> Result<String> {
        let parsed = args.parse()?;
        let request = self
            .invoker()
            .request(DialogKind::TextInfo, prompt)
            .values(parsed)
            .build();
        Ok(self
            .invoker()
            .capture(&request, args.stdin_text())
            .await?
            .unwrap_or_default())
    }
}
