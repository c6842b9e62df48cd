// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vendor-independent half of the response normalizer.
//!
//! Both backends instruct the model to answer with one of two JSON shapes:
//! an array of exactly three `{title, content}` objects on success, or a
//! single `{"error": "..."}` object when the model declines the topic. This
//! module classifies that nested reply string; the vendor crates own the
//! outer payload classification (candidates, choices, safety blocks).
//!
//! Classification is a pure function of the input: the same reply string
//! always yields the same result, and there is no repair or retry of
//! malformed JSON.

use tracing::error;

use crate::error::{FailureKind, PitchlineError};
use crate::types::{SUGGESTION_COUNT, Suggestion, SuggestionOutcome};

/// Classifies the generated text extracted from a vendor payload.
///
/// Priority, first match wins:
/// 1. not valid JSON at all -> [`FailureKind::BadModelJson`];
/// 2. an object whose `error` field is a string -> the model rejected the
///    topic, surfaced as [`SuggestionOutcome::RejectedTopic`];
/// 3. an array of exactly [`SUGGESTION_COUNT`] objects carrying `title` and
///    `content` strings -> [`SuggestionOutcome::Suggestions`];
/// 4. anything else -> [`FailureKind::UnexpectedShape`].
pub fn parse_model_reply(text: &str) -> Result<SuggestionOutcome, PitchlineError> {
    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            error!(reply = %text, "generated text is not valid JSON");
            return Err(PitchlineError::upstream(
                FailureKind::BadModelJson,
                format!("the generated content is not valid JSON: {e}"),
            ));
        }
    };

    // Rejection is probed before the success shape: a reply can only be one
    // or the other, and the rejection object is the cheaper check.
    if let Some(message) = value.get("error").and_then(serde_json::Value::as_str) {
        return Ok(SuggestionOutcome::RejectedTopic(message.to_string()));
    }

    match serde_json::from_value::<Vec<Suggestion>>(value) {
        Ok(items) if items.len() == SUGGESTION_COUNT => {
            Ok(SuggestionOutcome::Suggestions(items))
        }
        _ => {
            error!(reply = %text, "generated text has an unexpected shape");
            Err(PitchlineError::upstream(
                FailureKind::UnexpectedShape,
                format!(
                    "the generated content is valid JSON but is neither a rejection \
                     nor an array of {SUGGESTION_COUNT} title/content suggestions"
                ),
            ))
        }
    }
}
