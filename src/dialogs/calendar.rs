// src/dialogs/calendar.rs

use chrono::{Datelike, NaiveDate};

use crate::dialogs::Dialogs;
use crate::errors::Result;
use crate::exec::DialogBackend;
use crate::request::DialogKind;

/// `strftime` format the picked date is printed in.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

impl<B: DialogBackend> Dialogs<B> {
    /// Pick a date, starting at `initial`. The answer is `MM/DD/YYYY`.
    pub async fn calendar(&self, prompt: &str, initial: NaiveDate) -> Result<String> {
        let request = self
            .invoker()
            .request(DialogKind::Calendar, prompt)
            .assign("--day", initial.day())
            .assign("--month", initial.month())
            .assign("--year", initial.year())
            .option("--date-format", DATE_FORMAT)
            .build();
        Ok(self.invoker().run(&request).await?.unwrap_or_default())
    }
}
