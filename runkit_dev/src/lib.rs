// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Runkit Dev
//!
//! This crate provides utilities for developing Runkit: a synthetic
//! monospace typeface, a small TrueType font built in memory, the benchmark
//! text set, and a sink that records what drawers hand it.

mod font;

pub use font::{
    BAR_GLYPH, BOX_FONT_ADVANCES, BOX_FONT_ASCENDER, BOX_FONT_DESCENDER, BOX_FONT_UPEM, BOX_GLYPH,
    BoxFont, OUT_OF_RANGE_CHAR, box_font_data, box_font_mappings, box_typeface,
};

use runkit::peniko::Color;
use runkit::peniko::kurbo::Point;
use runkit::{FormattedText, GlyphMetrics, GlyphRunRef, RenderSink, Typeface};

/// Where benchmark text is drawn, as the top-left corner of the line box.
pub const TEXT_ORIGIN: Point = Point::new(10.0, 5.0);

/// Font size used by the benchmarks, in device-independent pixels.
pub const FONT_SIZE: f64 = 16.0;

/// Size of the surface the benchmarks render into.
pub const SURFACE_WIDTH: u32 = 1024;
/// See [`SURFACE_WIDTH`].
pub const SURFACE_HEIGHT: u32 = 32;

/// Baseline of [`monospace_typeface`], as a fraction of the font size.
pub const MONOSPACE_BASELINE: f64 = 0.75;

/// Advance of every glyph in [`monospace_typeface`], in em units.
pub const MONOSPACE_ADVANCE: f64 = 1229.0 / 2048.0;

/// The sentence the longer benchmark texts are built from.
pub const SENTENCE: &str = "This is a test text with numbers 0123456789 and symbols .,&%#";

/// A text to be drawn in benchmarks and tests.
#[derive(Clone, Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The text of the sample.
    pub text: String,
}

/// Returns the benchmark texts, from the empty string up to four sentences.
pub fn samples() -> Vec<Sample> {
    let mut samples: Vec<Sample> = [
        ("empty", ""),
        ("1 char", "T"),
        ("2 chars", "Th"),
        ("4 chars", "This"),
        ("8 chars", "This-is."),
    ]
    .into_iter()
    .map(|(name, text)| Sample {
        name,
        text: text.into(),
    })
    .collect();
    for (name, repeat) in [("1 sentence", 1), ("2 sentences", 2), ("4 sentences", 4)] {
        samples.push(Sample {
            name,
            text: SENTENCE.repeat(repeat),
        });
    }
    samples
}

/// A typeface with the glyph layout of a classic monospace font.
///
/// Printable ASCII is mapped with the glyph numbering common to TrueType
/// fonts (space is glyph 3), and every glyph has the same advance. There are
/// no outlines.
pub fn monospace_typeface() -> Typeface {
    let glyph_for = |byte: u8| u16::from(byte) - 29;
    let chars = (b' '..=b'~').map(|b| (char::from(b), glyph_for(b)));
    let advances = (b' '..=b'~').map(|b| (glyph_for(b), MONOSPACE_ADVANCE));
    Typeface::from_maps(chars, advances, MONOSPACE_BASELINE)
}

/// A glyph run as seen by a sink.
#[derive(Clone, Debug)]
pub struct RecordedRun {
    /// The fill color.
    pub color: Color,
    /// The run's baseline origin.
    pub baseline_origin: Point,
    /// The run's font size.
    pub font_size: f64,
    /// The run's resolution.
    pub pixels_per_dip: f32,
    /// Glyph indices, copied out of the drawer's buffer.
    pub glyph_ids: Vec<u16>,
    /// Advances, copied out of the drawer's buffer.
    pub advances: Vec<f64>,
    /// Whether the run was finalized when the sink received it.
    pub finalized: bool,
}

/// Formatted text as seen by a sink.
#[derive(Clone, Debug)]
pub struct RecordedText {
    /// The text.
    pub text: String,
    /// The top-left corner of the line box.
    pub origin: Point,
    /// The foreground color.
    pub color: Color,
    /// The font size.
    pub font_size: f64,
    /// Unrounded baseline offset from the top of the line box.
    pub baseline: f64,
    /// Glyphs the sink resolved for the text.
    pub glyphs: Vec<GlyphMetrics>,
}

/// One call into a [`RecordingSink`].
#[derive(Clone, Debug)]
pub enum Recorded {
    /// A call to [`RenderSink::fill_glyph_run`].
    Run(RecordedRun),
    /// A call to [`RenderSink::draw_formatted_text`].
    Text(RecordedText),
}

impl Recorded {
    /// The glyph indices drawn, however they were submitted.
    pub fn glyph_ids(&self) -> Vec<u16> {
        match self {
            Self::Run(run) => run.glyph_ids.clone(),
            Self::Text(text) => text.glyphs.iter().map(|g| g.glyph_id).collect(),
        }
    }

    /// The advances drawn, however they were submitted.
    pub fn advances(&self) -> Vec<f64> {
        match self {
            Self::Run(run) => run.advances.clone(),
            Self::Text(text) => text.glyphs.iter().map(|g| g.advance).collect(),
        }
    }
}

/// A [`RenderSink`] that copies everything it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Calls in the order they were made.
    pub calls: Vec<Recorded>,
}

impl RecordingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded glyph runs.
    pub fn runs(&self) -> impl Iterator<Item = &RecordedRun> + '_ {
        self.calls.iter().filter_map(|call| match call {
            Recorded::Run(run) => Some(run),
            Recorded::Text(_) => None,
        })
    }

    /// The recorded formatted texts.
    pub fn texts(&self) -> impl Iterator<Item = &RecordedText> + '_ {
        self.calls.iter().filter_map(|call| match call {
            Recorded::Text(text) => Some(text),
            Recorded::Run(_) => None,
        })
    }

    /// The most recent call.
    pub fn last(&self) -> Option<&Recorded> {
        self.calls.last()
    }
}

impl RenderSink for RecordingSink {
    fn fill_glyph_run(&mut self, color: Color, run: GlyphRunRef<'_>) {
        self.calls.push(Recorded::Run(RecordedRun {
            color,
            baseline_origin: run.baseline_origin(),
            font_size: run.font_size(),
            pixels_per_dip: run.pixels_per_dip(),
            glyph_ids: run.glyph_ids().to_vec(),
            advances: run.advances().to_vec(),
            finalized: run.run().is_finalized(),
        }));
    }

    fn draw_formatted_text(&mut self, text: &FormattedText, origin: Point) {
        self.calls.push(Recorded::Text(RecordedText {
            text: text.text().into(),
            origin,
            color: text.color(),
            font_size: text.font_size(),
            baseline: text.baseline(),
            glyphs: text.glyphs().collect(),
        }));
    }
}
