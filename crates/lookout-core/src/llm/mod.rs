//! Language-model completion seam.
//!
//! Both the plan generator and the report synthesizer issue exactly one
//! completion per call through a [`CompletionClient`].

use async_trait::async_trait;

use crate::error::CompletionError;

pub mod openai;

pub use openai::OpenAiClient;

/// A single system + user turn sent to a completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: String,
    pub user: String,
    /// Ask the endpoint for a JSON object response.
    pub json_mode: bool,
}

impl CompletionRequest {
    pub fn new(model: &str, system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            model: model.to_string(),
            system: system.into(),
            user: user.into(),
            json_mode: false,
        }
    }

    pub fn json(mut self) -> Self {
        self.json_mode = true;
        self
    }
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the text content of the first choice.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
