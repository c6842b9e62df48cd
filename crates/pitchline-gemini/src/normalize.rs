// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classification of raw Gemini response bodies.
//!
//! A 200 from `generateContent` can still carry a blocked prompt, a
//! withheld candidate, or a vendor error object, so every body goes
//! through one ordered decision ladder:
//!
//! 1. body is not JSON at all
//! 2. a candidate carries generated text (handed to the shared reply parser)
//! 3. a top-level `error` key
//! 4. `promptFeedback.blockReason` (the prompt was rejected)
//! 5. first candidate finished with `SAFETY` (the reply was withheld)
//! 6. anything else
//!
//! The text check runs before the error check on purpose: a body that
//! contains both is a usable reply with vendor noise attached.

use pitchline_core::{FailureKind, PitchlineError, SuggestionOutcome, parse_model_reply};
use tracing::error;

use crate::types::GenerateContentResponse;

/// Turns a raw `generateContent` body into a suggestion outcome or a
/// classified upstream failure.
pub fn normalize_response(raw: &str) -> Result<SuggestionOutcome, PitchlineError> {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            error!(payload = %raw, "Gemini response body is not valid JSON");
            return Err(PitchlineError::upstream(
                FailureKind::BadUpstreamJson,
                format!("invalid JSON response from the Gemini API: {e}"),
            ));
        }
    };

    let response: GenerateContentResponse = match serde_json::from_value(value) {
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
        error!(payload = %raw, "Gemini API reported an error");
        return Err(PitchlineError::upstream(
            FailureKind::VendorError,
            format!("the Gemini API reported an error: {message}"),
        ));
    }

    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            let ratings = feedback
                .safety_ratings
                .as_ref()
                .map(|value| value.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            error!(reason = %reason, "Gemini blocked the prompt");
            return Err(PitchlineError::upstream(
                FailureKind::PromptBlocked,
                format!(
                    "the Gemini API blocked the prompt. Reason: {reason}. Safety ratings: {ratings}"
                ),
            ));
        }
    }

    if let Some(candidate) = response.candidates.as_ref().and_then(|c| c.first()) {
        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            let ratings = candidate
                .safety_ratings
                .as_ref()
                .map(|value| value.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            error!("Gemini withheld the response for safety reasons");
            return Err(PitchlineError::upstream(
                FailureKind::ResponseBlocked,
                format!(
                    "the Gemini API withheld the response for safety reasons. Finish reason: SAFETY. Safety ratings: {ratings}"
                ),
            ));
        }
    }

    Err(unexpected_shape(raw))
}

fn unexpected_shape(raw: &str) -> PitchlineError {
    error!(payload = %raw, "Gemini response has an unexpected shape");
    PitchlineError::upstream(
        FailureKind::UnexpectedShape,
        "the Gemini API response did not contain generated text, an error, or a block verdict",
    )
}
