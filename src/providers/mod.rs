// Completion provider
//
// The pipeline talks to the model through `LlmProvider` so tests and
// alternate OpenAI-compatible endpoints can be swapped in.

use anyhow::Result;
use async_trait::async_trait;

pub mod openai;
pub mod types;

pub use openai::OpenAIProvider;
pub use types::{CompletionRequest, CompletionResponse, Message};

/// Trait for chat-completion backends
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a request and wait for the full response
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;

    /// Provider name (e.g. "openai")
    fn name(&self) -> &str;

    /// Model used when the request leaves `model` empty
    fn default_model(&self) -> &str;
}
