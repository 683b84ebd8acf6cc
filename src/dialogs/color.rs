// src/dialogs/color.rs

use crate::dialogs::Dialogs;
use crate::errors::Result;
use crate::exec::DialogBackend;
use crate::request::DialogKind;

impl<B: DialogBackend> Dialogs<B> {
    /// Pick a color. `initial` is any color name the program understands;
    /// without one the program picks its own. The answer looks like
    /// `rgb(0,128,0)`.
    pub async fn color_selection(
        &self,
        prompt: &str,
        initial: Option<&str>,
        show_palette: bool,
    ) -> Result<String> {
        let mut builder = self.invoker().request(DialogKind::ColorSelection, prompt);
        if let Some(color) = initial.filter(|c| !c.is_empty()) {
            builder = builder.option("--color", color);
        }
        let request = builder.flag_if(show_palette, "--show-palette").build();
        Ok(self.invoker().run(&request).await?.unwrap_or_default())
    }
}
