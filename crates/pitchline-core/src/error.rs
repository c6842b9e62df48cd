// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Pitchline suggestion service.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// Classifies why an upstream suggestion attempt produced no usable reply.
///
/// The classification mirrors the normalizer's priority order: payload-level
/// JSON problems first, then nested model-reply problems, then vendor-reported
/// errors and safety blocks, with [`FailureKind::UnexpectedShape`] as the
/// catch-all for payloads that parse but match nothing we know.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum FailureKind {
    /// The vendor's HTTP body was not valid JSON at all.
    BadUpstreamJson,
    /// The nested generated text was present but not valid JSON.
    BadModelJson,
    /// The payload (or nested reply) parsed but matched no known shape.
    UnexpectedShape,
    /// The vendor explicitly reported an error object in a 2xx body.
    VendorError,
    /// The vendor refused to run the prompt (pre-generation safety block).
    PromptBlocked,
    /// The vendor withheld the completion (post-generation safety block).
    ResponseBlocked,
    /// Transport-level failure: connection error, timeout, or non-2xx status.
    Network,
}

/// The primary error type used across all Pitchline crates.
#[derive(Debug, Error)]
pub enum PitchlineError {
    /// Configuration errors (invalid TOML, missing API key, bad backend name).
    #[error("configuration error: {0}")]
    Config(String),

    /// Upstream suggestion failures, classified by [`FailureKind`].
    #[error("upstream failure ({kind}): {detail}")]
    Upstream { kind: FailureKind, detail: String },

    /// Storage backend errors (database connection, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PitchlineError {
    /// Builds an [`PitchlineError::Upstream`] with the given kind and detail.
    pub fn upstream(kind: FailureKind, detail: impl Into<String>) -> Self {
        PitchlineError::Upstream {
            kind,
            detail: detail.into(),
        }
    }

    /// Returns the failure kind when this is an upstream failure.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            PitchlineError::Upstream { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
