// src/dialogs/entry.rs

use crate::dialogs::Dialogs;
use crate::dialogs::parse::split_credentials;
use crate::errors::Result;
use crate::exec::DialogBackend;
use crate::request::DialogKind;

/// Answer of a username + password dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl<B: DialogBackend> Dialogs<B> {
    /// Ask for a line of text, pre-filled with `placeholder`.
    pub async fn entry(&self, prompt: &str, placeholder: &str) -> Result<String> {
        let request = self
            .invoker()
            .request(DialogKind::Entry, prompt)
            .option("--entry-text", placeholder)
            .build();
        Ok(self.invoker().run(&request).await?.unwrap_or_default())
    }

    pub async fn password(&self, prompt: &str) -> Result<String> {
        let request = self.invoker().request(DialogKind::Password, prompt).build();
        Ok(self.invoker().run(&request).await?.unwrap_or_default())
    }

    /// Ask for a username and a password in one dialog.
    ///
    /// Declining yields empty credentials.
    pub async fn username_and_password(&self, prompt: &str) -> Result<Credentials> {
        let request = self
            .invoker()
            .request(DialogKind::UsernamePassword, prompt)
            .flag("--username")
            .build();
        let output = self.invoker().run(&request).await?.unwrap_or_default();
        let (username, password) = split_credentials(&output)?;
        Ok(Credentials { username, password })
    }
}
