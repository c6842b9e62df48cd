// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt template rendering shared by the vendor backends.
//!
//! Each backend ships a default template and accepts an override from
//! configuration. Templates reference the caller's topic through the
//! `{topic}` placeholder, possibly more than once.

/// Placeholder substituted with the caller's topic at render time.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Substitutes every occurrence of [`TOPIC_PLACEHOLDER`] in `template`.
pub fn render_prompt(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_every_occurrence() {
        let template = "Topic: '{topic}'. The language of '{topic}' decides the output language.";
        let rendered = render_prompt(template, "harbor strikes");
        assert_eq!(
            rendered,
            "Topic: 'harbor strikes'. The language of 'harbor strikes' decides the output language."
        );
    }

    #[test]
    fn template_without_placeholder_is_unchanged() {
        assert_eq!(render_prompt("no placeholder here", "topic"), "no placeholder here");
    }

    #[test]
    fn topic_text_is_inserted_verbatim() {
        // Braces in the topic itself must not be treated as placeholders.
        let rendered = render_prompt("{topic}", "a {strange} topic");
        assert_eq!(rendered, "a {strange} topic");
    }
}
