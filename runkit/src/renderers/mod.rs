// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render sink implementation backends.

#[cfg(feature = "tiny_skia")]
pub mod tiny_skia;
