// src/dialogs/scale.rs

use crate::dialogs::Dialogs;
use crate::dialogs::parse::{NO_SCALE_VALUE, parse_scale_value};
use crate::errors::Result;
use crate::exec::{DialogBackend, FeedSender, Outcome};
use crate::request::DialogKind;

/// Options for a scale (slider) dialog.
#[derive(Debug, Clone)]
pub struct ScaleArgs {
    pub initial: i32,
    pub step: i32,
    pub min: i32,
    pub max: i32,
    /// When set, every intermediate value is sent here while the slider
    /// moves (`--print-partial`).
    pub partial: Option<FeedSender>,
}

impl Default for ScaleArgs {
    fn default() -> Self {
        Self {
            initial: 0,
            step: 1,
            min: 0,
            max: 100,
            partial: None,
        }
    }
}

impl<B: DialogBackend> Dialogs<B> {
    /// Pick a number on a slider.
    ///
    /// Returns `-1` when the dialog produced no value (declined, or empty
    /// output). With `partial` set, the answer is the last value printed.
    /// The partial sender is dropped when this returns, which closes the
    /// caller's receiver.
    pub async fn scale(&self, prompt: &str, args: ScaleArgs) -> Result<i32> {
        let request = self
            .invoker()
            .request(DialogKind::Scale, prompt)
            .assign("--value", args.initial)
            .assign("--min-value", args.min)
            .assign("--max-value", args.max)
            .assign("--step", args.step)
            .flag_if(args.partial.is_some(), "--print-partial")
            .build();

        match args.partial {
            Some(sink) => {
                let outcome = self.invoker().run_partial(&request, sink).await?;
                Ok(match outcome {
                    Outcome::Success(values) => values.last().copied().unwrap_or(NO_SCALE_VALUE),
                    Outcome::Declined => NO_SCALE_VALUE,
                })
            }
            None => {
                let output = self.invoker().run(&request).await?.unwrap_or_default();
                parse_scale_value(&output)
            }
        }
    }
}
