// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP boundary for the Pitchline suggestion service.
//!
//! The gateway validates inbound topics, invokes whichever
//! `SuggestionProvider` the binary configured, persists delivered
//! suggestions, and maps every outcome onto the three response shapes the
//! API exposes (200 suggestions, 400 rejection, 500 failure). A panic
//! catch-all guarantees nothing propagates past the boundary unhandled.

pub mod handlers;
pub mod server;
pub mod validate;

pub use server::{AppState, ServerConfig, build_router, start_server};
