// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Topic validation for inbound suggestion requests.
//!
//! The request body is inspected as raw JSON so that a missing field, a
//! non-string field, and an out-of-bounds string each produce their own
//! message. Checks run in order and the first failure wins; a topic that
//! passes is guaranteed to be a string of 3 to 255 characters.

use serde_json::Value;

/// Minimum topic length, in characters.
pub const TOPIC_MIN_CHARS: usize = 3;
/// Maximum topic length, in characters.
pub const TOPIC_MAX_CHARS: usize = 255;

/// Extracts and validates the `prompt` field from a request body.
///
/// Returns the topic on success, or the validation message to send back
/// with a 400. Lengths are counted in characters, not bytes, so multibyte
/// topics near the bounds validate the way a caller would expect.
pub fn validate_topic(body: &Value) -> Result<String, String> {
    let prompt = match body.get("prompt") {
        None | Some(Value::Null) => return Err("A topic prompt is required.".to_string()),
        Some(value) => value,
    };

    let topic = match prompt.as_str() {
        Some(topic) => topic,
        None => return Err("The prompt must be a string.".to_string()),
    };

    if topic.is_empty() {
        return Err("A topic prompt is required.".to_string());
    }

    let chars = topic.chars().count();
    if chars < TOPIC_MIN_CHARS {
        return Err("The prompt must be at least 3 characters.".to_string());
    }
    if chars > TOPIC_MAX_CHARS {
        return Err("The prompt must not be greater than 255 characters.".to_string());
    }

    Ok(topic.to_string())
}
