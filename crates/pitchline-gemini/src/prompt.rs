// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default prompt template for the Gemini backend.
//!
//! The template instructs the model to echo the topic's language, to
//! answer with exactly three suggestions as a bare JSON array, and to
//! reject non-journalistic topics with a single-key error object. The
//! `{topic}` placeholder appears twice and both occurrences are
//! substituted at render time. Operators can replace the whole template
//! via `gemini.prompt_template` in the config file.

/// Prompt sent to Gemini when no override is configured.
pub const DEFAULT_PROMPT_TEMPLATE: &str = r#"You are an assistant specialized in generating journalistic content suggestions.
The topic provided is: '{topic}'.
The language of the topic '{topic}' suggests the desired output language. Please respond *only* in that language.

Your task is to analyze whether the provided topic is a valid journalistic topic.
If it is, return exactly 3 useful, creative, and specific journalistic content suggestions in the following JSON format:

[
  {"title": "Short title here", "content": "Detailed explanation here"},
  {"title": "Another short title", "content": "Another detailed explanation"},
  {"title": "Third short title", "content": "Third detailed explanation"}
]

If the message is not a valid topic, respond with a single JSON object like this:

{
  "error": "I can only assist with content suggestions for journalistic topics."
}

Respond only with the JSON structure. Do not include any explanatory text before or after the JSON.
Do not use markdown like ```json ``` to wrap the JSON output.
The entire response must be a valid JSON."#;
