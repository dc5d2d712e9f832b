use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use crate::Result;

/// A single chat-completion call: one system message, one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

#[async_trait]
pub trait CompletionModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Send one request and return the text of the first choice.
    ///
    /// Transport failures, timeouts, non-success statuses and malformed
    /// responses all surface as `Error::Completion`. Implementations must not retry.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
