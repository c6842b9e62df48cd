// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as a recognized backend name, a bounded upstream
//! timeout, and prompt templates that actually carry the topic placeholder.

use pitchline_core::prompt::TOPIC_PLACEHOLDER;

use crate::diagnostic::ConfigError;
use crate::model::PitchlineConfig;

/// Backends the `provider.backend` key may select.
pub const KNOWN_BACKENDS: [&str; 2] = ["gemini", "openai"];

/// Upstream timeout bounds in seconds. The default sits in single digits;
/// anything above the cap would hold request handlers open too long.
const TIMEOUT_SECS_MIN: u64 = 1;
const TIMEOUT_SECS_MAX: u64 = 30;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PitchlineConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate host is not empty
    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        // Accept valid IPv4, IPv6, or hostname patterns
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    // Validate the selected backend is one we ship
    if !KNOWN_BACKENDS.contains(&config.provider.backend.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "provider.backend must be one of {}, got `{}`",
                KNOWN_BACKENDS.join(", "),
                config.provider.backend
            ),
        });
    }

    // Validate the upstream timeout stays within bounds
    let timeout = config.provider.timeout_secs;
    if !(TIMEOUT_SECS_MIN..=TIMEOUT_SECS_MAX).contains(&timeout) {
        errors.push(ConfigError::Validation {
            message: format!(
                "provider.timeout_secs must be between {TIMEOUT_SECS_MIN} and \
                 {TIMEOUT_SECS_MAX}, got {timeout}"
            ),
        });
    }

    // Validate database_path is not empty
    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    // Validate prompt template overrides carry the topic placeholder
    if let Some(template) = &config.gemini.prompt_template {
        if !template.contains(TOPIC_PLACEHOLDER) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "gemini.prompt_template must contain the {TOPIC_PLACEHOLDER} placeholder"
                ),
            });
        }
    }

    if let Some(template) = &config.openai.prompt_template {
        if !template.contains(TOPIC_PLACEHOLDER) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "openai.prompt_template must contain the {TOPIC_PLACEHOLDER} placeholder"
                ),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
