// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Pitchline integration tests.
//!
//! Provides mock adapters for fast, deterministic, CI-runnable tests
//! without external services.
//!
//! # Components
//!
//! - [`MockProvider`] - Mock suggestion provider with scripted outcomes
//! - [`MemoryStore`] - In-memory suggestion store with failure injection

pub mod memory_store;
pub mod mock_provider;

pub use memory_store::MemoryStore;
pub use mock_provider::MockProvider;
