// src/dialogs/files.rs

use std::collections::BTreeMap;

use crate::dialogs::Dialogs;
use crate::dialogs::parse::split_list;
use crate::errors::Result;
use crate::exec::DialogBackend;
use crate::request::DialogKind;

/// Named groups of glob patterns, e.g. `"Markdown files" => ["*.md"]`.
pub type FileFilters = BTreeMap<String, Vec<String>>;

/// Render filters as `--file-filter NAME|PAT PAT` pairs, in name order.
pub fn build_file_filters(filters: &FileFilters) -> Vec<String> {
    filters
        .iter()
        .flat_map(|(name, patterns)| {
            [
                "--file-filter".to_string(),
                format!("{name}|{}", patterns.join(" ")),
            ]
        })
        .collect()
}

impl<B: DialogBackend> Dialogs<B> {
    /// Select one or more files.
    pub async fn file_selection(
        &self,
        prompt: &str,
        filters: &FileFilters,
    ) -> Result<Vec<String>> {
        let request = self
            .invoker()
            .request(DialogKind::FileSelection, prompt)
            .flag("--multiple")
            .values(build_file_filters(filters))
            .build();
        let output = self.invoker().run(&request).await?.unwrap_or_default();
        Ok(split_list(&output))
    }

    /// Select one or more directories.
    pub async fn directory_selection(&self, prompt: &str) -> Result<Vec<String>> {
        let request = self
            .invoker()
            .request(DialogKind::DirectorySelection, prompt)
            .flag("--multiple")
            .flag("--directory")
            .build();
        let output = self.invoker().run(&request).await?.unwrap_or_default();
        Ok(split_list(&output))
    }
}
