// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `runkit`.
//!
//! - The `util` module contains shared utility functions that are needed by different
//!   test methods.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that shared utilities only need to be defined once.
//! - If you want to add new tests, try to follow these guidelines:
//!   - Put tests into the module matching their topic (builder, equivalence, fonts, metrics,
//!     render, strategies), or create a new one in case it doesn't exist yet.
//!   - Tests for bugs should go into `issues.rs`.
//!   - For test naming, put the topic of the test at the start of the name, e.g.
//!     `builder_shorter_text` rather than `shorter_text_builder`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod fonts;
mod issues;
#[macro_use]
mod util;
