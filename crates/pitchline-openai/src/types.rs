// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the OpenAI Chat Completions endpoint.
//!
//! The response structs keep every field optional: filtered completions
//! and vendor errors arrive as partial documents, and classification
//! relies on presence checks rather than deserialization failures.

use serde::{Deserialize, Serialize};

/// Body for `POST /v1/chat/completions`.
///
/// JSON-only output is enforced by the prompt rather than by
/// `response_format`; the vendor's JSON mode pins replies to top-level
/// objects, which the three-item-array reply contract cannot use.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// Builds a single-turn user request for the given prompt.
    pub fn for_prompt(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Top-level response document.
///
/// `error` stays untyped: presence is what classification keys on.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Option<Vec<Choice>>,
    pub error: Option<serde_json::Value>,
}

impl ChatCompletionResponse {
    /// Content of the first choice's message, when present.
    pub fn generated_text(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<ResponseMessage>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

/// Pulls `error.message` out of an error body, for non-2xx statuses.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
