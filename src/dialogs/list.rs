// src/dialogs/list.rs

use crate::dialogs::Dialogs;
use crate::dialogs::parse::split_list;
use crate::errors::Result;
use crate::exec::DialogBackend;
use crate::request::DialogKind;

impl<B: DialogBackend> Dialogs<B> {
    /// Pick one of `options`. The column header is the prompt, hidden.
    pub async fn list<S: AsRef<str>>(&self, prompt: &str, options: &[S]) -> Result<String> {
        let request = self
            .invoker()
            .request(DialogKind::List, prompt)
            .flag("--hide-header")
            .option("--column", prompt)
            .values(options.iter().map(|o| o.as_ref().to_string()))
            .build();
        Ok(self.invoker().run(&request).await?.unwrap_or_default())
    }

    /// Tick any number of `options`, all initially unticked.
    ///
    /// Output is split like every other multi-value dialog, so ticking
    /// nothing yields `[""]`.
    pub async fn checklist<S: AsRef<str>>(
        &self,
        prompt: &str,
        options: &[S],
    ) -> Result<Vec<String>> {
        let rows = options
            .iter()
            .flat_map(|o| ["FALSE".to_string(), o.as_ref().to_string()]);
        let request = self
            .invoker()
            .request(DialogKind::Checklist, prompt)
            .flag("--checklist")
            .flag("--hide-header")
            .option("--column", "")
            .option("--column", prompt)
            .values(rows)
            .build();
        let output = self.invoker().run(&request).await?.unwrap_or_default();
        Ok(split_list(&output))
    }
}
