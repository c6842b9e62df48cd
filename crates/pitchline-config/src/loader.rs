// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./pitchline.toml` > `~/.config/pitchline/pitchline.toml`
//! > `/etc/pitchline/pitchline.toml` with environment variable overrides via
//! the `PITCHLINE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::PitchlineConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/pitchline/pitchline.toml` (system-wide)
/// 3. `~/.config/pitchline/pitchline.toml` (user XDG config)
/// 4. `./pitchline.toml` (local directory)
/// 5. `PITCHLINE_*` environment variables
pub fn load_config() -> Result<PitchlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PitchlineConfig::default()))
        .merge(Toml::file("/etc/pitchline/pitchline.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("pitchline/pitchline.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("pitchline.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Useful for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PitchlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PitchlineConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PitchlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PitchlineConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// CRITICAL: Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `PITCHLINE_GEMINI_API_KEY`
/// must map to `gemini.api_key`, not `gemini.api.key`, and
/// `PITCHLINE_SERVICE_LOG_LEVEL` to `service.log_level`.
fn env_provider() -> Env {
    Env::prefixed("PITCHLINE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: PITCHLINE_OPENAI_PROMPT_TEMPLATE -> "openai_prompt_template"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("server_", "server.", 1)
            .replacen("provider_", "provider.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("openai_", "openai.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
