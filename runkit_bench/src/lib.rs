// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Runkit Bench
//!
//! This crate provides benchmarks for the Runkit library.

use std::hint::black_box;
use std::sync::{Arc, OnceLock};

use runkit::peniko::Color;
use runkit::peniko::kurbo::Point;
use runkit::{DrawerConfig, FontLibrary, FormattedText, GlyphRunRef, RenderSink, Typeface};
use runkit_dev::{FONT_SIZE, Sample};

pub mod benches;
pub mod render;

/// Families tried in order when picking the benchmark font.
pub const FONT_FAMILY_LIST: &[&str] = &["Courier New", "monospace"];

static SAMPLES: OnceLock<Vec<Sample>> = OnceLock::new();
static TYPEFACE: OnceLock<Arc<Typeface>> = OnceLock::new();

/// Returns the texts every benchmark iteration draws.
pub fn get_samples() -> &'static [Sample] {
    SAMPLES.get_or_init(runkit_dev::samples)
}

/// Returns the benchmark typeface.
///
/// This is the first entry of [`FONT_FAMILY_LIST`] installed on the system,
/// or the in-memory box font when none is.
pub fn typeface() -> Arc<Typeface> {
    TYPEFACE
        .get_or_init(|| {
            let mut library = FontLibrary::new();
            FONT_FAMILY_LIST
                .iter()
                .find_map(|family| library.resolve(family).ok())
                .map(Arc::new)
                .unwrap_or_else(|| Arc::new(runkit_dev::box_typeface()))
        })
        .clone()
}

/// The drawer configuration shared by all benchmarks.
pub fn config() -> DrawerConfig {
    DrawerConfig::new()
        .family(FONT_FAMILY_LIST[0])
        .font_size(FONT_SIZE)
}

/// A sink that consumes its input without drawing.
///
/// Formatted text still has its glyphs resolved, as any real sink would.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn fill_glyph_run(&mut self, color: Color, run: GlyphRunRef<'_>) {
        black_box((color, run.baseline_origin()));
        black_box((run.glyph_ids(), run.advances()));
    }

    fn draw_formatted_text(&mut self, text: &FormattedText, origin: Point) {
        black_box(origin);
        for glyph in text.glyphs() {
            black_box(glyph);
        }
    }
}
