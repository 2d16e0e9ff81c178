// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runkit turns strings into glyph runs for a single font at a single size.
//!
//! The fast path is [`GlyphRunBuilder`]. It resolves characters through a
//! [`GlyphMetricsTable`] built once per typeface and size, writes glyphs into
//! a [`RunBuffer`] that is reused across calls, and by default keeps a single
//! [`GlyphRun`] descriptor alive, updating only its origin and length. Once
//! the buffer is large enough, drawing allocates nothing.
//!
//! [`NaiveGlyphRunDrawer`] and [`FormattedTextDrawer`] produce the same output
//! the slow way and exist for comparison. All three implement [`TextDrawer`]
//! and hand their output to a [`RenderSink`].
//!
//! Text is laid out on a single line, left to right, with one glyph per
//! character. There is no shaping, kerning, fallback or line breaking;
//! characters the font doesn't map become [`GlyphMetrics::SENTINEL`].
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm].
//! - `system` (enabled by default): Resolve font families by name with [`FontLibrary`].
//! - `tiny_skia`: Implements [`RenderSink`] for Tiny Skia's `PixmapMut`.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://crates.io/crates/libm

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("runkit requires either the `std` or `libm` feature to be enabled");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use core_maths as _;

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use peniko;
pub use skrifa;

mod buffer;
mod builder;
mod config;
mod error;
mod formatted;
#[cfg(feature = "system")]
mod library;
mod math;
mod metrics;
mod naive;
mod run;
mod sink;
mod typeface;

pub mod renderers;

pub use buffer::RunBuffer;
pub use builder::GlyphRunBuilder;
pub use config::{DEFAULT_CAPACITY, DrawerConfig, RunStrategy, STANDARD_DPI};
pub use error::{ConfigError, ConfigErrorKind, Error, UnsupportedFontError, UnsupportedFontKind};
pub use formatted::{FormattedText, FormattedTextDrawer};
#[cfg(feature = "system")]
pub use library::FontLibrary;
pub use metrics::{GlyphMetrics, GlyphMetricsTable};
pub use naive::NaiveGlyphRunDrawer;
pub use run::{GlyphRun, GlyphRunRef, PositionedGlyph};
pub use sink::{RenderSink, TextDrawer};
pub use typeface::Typeface;
