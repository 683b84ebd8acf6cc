// src/dialogs/messages.rs

use crate::dialogs::Dialogs;
use crate::errors::Result;
use crate::exec::DialogBackend;
use crate::request::DialogKind;

impl<B: DialogBackend> Dialogs<B> {
    /// Show an error message.
    pub async fn error(&self, prompt: &str) -> Result<()> {
        self.message(DialogKind::Error, prompt).await
    }

    pub async fn info(&self, prompt: &str) -> Result<()> {
        self.message(DialogKind::Info, prompt).await
    }

    pub async fn warning(&self, prompt: &str) -> Result<()> {
        self.message(DialogKind::Warning, prompt).await
    }

    /// Post a desktop notification.
    pub async fn notification(&self, prompt: &str) -> Result<()> {
        let request = self
            .invoker()
            .request(DialogKind::Notification, prompt)
            .flag("--listen")
            .build();
        self.invoker().run(&request).await?;
        Ok(())
    }

    /// Ask a yes/no question. "No" (or closing the window) is `false`.
    pub async fn question(&self, prompt: &str) -> Result<bool> {
        let request = self.invoker().request(DialogKind::Question, prompt).build();
        self.invoker().run_question(&request).await
    }

    async fn message(&self, kind: DialogKind, prompt: &str) -> Result<()> {
        let request = self.invoker().request(kind, prompt).flag("--ellipsize").build();
        // Dismissing a message box is not an error.
        self.invoker().run(&request).await?;
        Ok(())
    }
}
