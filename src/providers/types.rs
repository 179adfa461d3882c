// Request/response types for the completion provider

use serde::{Deserialize, Serialize};

/// A chat message (the pipeline only ever sends one user message)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Provider-agnostic completion request
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,

    /// Model name; empty means the provider's default
    pub model: String,
}

impl CompletionRequest {
    /// A request carrying a single user-role message
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(prompt)],
            model: String::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub id: String,
    pub model: String,
    /// Text of the first choice (empty if the model returned none)
    pub text: String,
    pub finish_reason: Option<String>,
    pub provider: String,
}
