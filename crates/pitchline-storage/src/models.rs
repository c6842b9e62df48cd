// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical record type is defined in `pitchline-core` for use
//! across adapter trait boundaries. This module re-exports it for
//! convenience within the storage crate.

pub use pitchline_core::SuggestionRecord;
