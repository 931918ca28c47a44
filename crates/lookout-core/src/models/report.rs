//! Final report model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Markdown produced by the report synthesizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Report(String);

impl Report {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self(markdown.into())
    }

    /// A failure rendered as report text, for callers that show the
    /// degraded outcome instead of aborting.
    pub fn degraded(error: &dyn std::error::Error) -> Self {
        Self(format!("**{error}**\n"))
    }

    pub fn markdown(&self) -> &str {
        &self.0
    }

    pub fn into_markdown(self) -> String {
        self.0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
