// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classification of raw Chat Completions response bodies.
//!
//! Mirrors the Gemini ladder with this vendor's field names. There is
//! no prompt-block branch: OpenAI has no pre-generation block
//! indicator, so refusals surface either as generated text or as a
//! `content_filter` finish reason.
//!
//! 1. body is not JSON at all
//! 2. a choice carries message content (handed to the shared reply parser)
//! 3. a top-level `error` key
//! 4. first choice finished with `content_filter` (the reply was withheld)
//! 5. anything else

use pitchline_core::{FailureKind, PitchlineError, SuggestionOutcome, parse_model_reply};
use tracing::error;

use crate::types::ChatCompletionResponse;

/// Turns a raw Chat Completions body into a suggestion outcome or a
/// classified upstream failure.
pub fn normalize_response(raw: &str) -> Result<SuggestionOutcome, PitchlineError> {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            error!(payload = %raw, "OpenAI response body is not valid JSON");
            return Err(PitchlineError::upstream(
                FailureKind::BadUpstreamJson,
                format!("invalid JSON response from the OpenAI API: {e}"),
            ));
        }
    };

    let response: ChatCompletionResponse = match serde_json::from_value(value) {
        Ok(response) => response,
        Err(_) => return Err(unexpected_shape(raw)),
    };

    if let Some(text) = response.generated_text() {
        return parse_model_reply(text);
    }

    if let Some(err) = &response.error {
        let message = err
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        error!(payload = %raw, "OpenAI API reported an error");
        return Err(PitchlineError::upstream(
            FailureKind::VendorError,
            format!("the OpenAI API reported an error: {message}"),
        ));
    }

    if let Some(choice) = response.choices.as_ref().and_then(|c| c.first()) {
        if choice.finish_reason.as_deref() == Some("content_filter") {
            error!("OpenAI withheld the response via its content filter");
            return Err(PitchlineError::upstream(
                FailureKind::ResponseBlocked,
                "the OpenAI API withheld the response. Finish reason: content_filter",
            ));
        }
    }

    Err(unexpected_shape(raw))
}

fn unexpected_shape(raw: &str) -> PitchlineError {
    error!(payload = %raw, "OpenAI response has an unexpected shape");
    PitchlineError::upstream(
        FailureKind::UnexpectedShape,
        "the OpenAI API response did not contain message content, an error, or a filter verdict",
    )
}
