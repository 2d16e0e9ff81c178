// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph run descriptors.

use alloc::sync::Arc;

use peniko::kurbo::Point;

use crate::buffer::RunBuffer;
use crate::typeface::Typeface;

/// A sequence of glyphs with shared rendering properties.
///
/// The run describes everything about the glyphs except the glyphs
/// themselves: those live in a [`RunBuffer`] and are attached with
/// [`bind`](Self::bind), which yields the [`GlyphRunRef`] sinks consume.
///
/// Runs are finalized on construction and can't be changed through the
/// public API. Drawers that keep one run alive across calls update it through
/// a crate-private mutation window that is always closed again before the run
/// can be bound.
#[derive(Clone, Debug)]
pub struct GlyphRun {
    typeface: Arc<Typeface>,
    font_size: f64,
    pixels_per_dip: f32,
    baseline_origin: Point,
    glyph_count: usize,
    bidi_level: u8,
    sideways: bool,
    finalized: bool,
}

impl GlyphRun {
    /// Creates a finalized run of `glyph_count` glyphs.
    ///
    /// Runs are always left-to-right (bidi level 0) and upright.
    pub fn new(
        typeface: Arc<Typeface>,
        font_size: f64,
        pixels_per_dip: f32,
        baseline_origin: Point,
        glyph_count: usize,
    ) -> Self {
        debug_assert!(font_size > 0.0, "font size must be positive");
        debug_assert!(pixels_per_dip > 0.0, "pixels per DIP must be positive");
        Self {
            typeface,
            font_size,
            pixels_per_dip,
            baseline_origin,
            glyph_count,
            bidi_level: 0,
            sideways: false,
            finalized: true,
        }
    }

    /// The typeface all glyphs come from.
    pub fn typeface(&self) -> &Arc<Typeface> {
        &self.typeface
    }

    /// Font size in device-independent pixels per em.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Device pixels per device-independent pixel.
    pub fn pixels_per_dip(&self) -> f32 {
        self.pixels_per_dip
    }

    /// Position of the first glyph's origin on the baseline.
    pub fn baseline_origin(&self) -> Point {
        self.baseline_origin
    }

    /// Number of glyphs.
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    /// Bidi embedding level; always 0 (left-to-right).
    pub fn bidi_level(&self) -> u8 {
        self.bidi_level
    }

    /// Whether glyphs are rotated for vertical text; always false.
    pub fn is_sideways(&self) -> bool {
        self.sideways
    }

    /// Whether the run is outside a mutation window.
    ///
    /// This is always true for runs reachable from outside the crate.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Attaches the committed contents of `buffer`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer's committed length differs from the run's glyph
    /// count, or if the run is not finalized.
    pub fn bind<'a>(&'a self, buffer: &'a RunBuffer) -> GlyphRunRef<'a> {
        assert!(self.finalized, "glyph run bound inside a mutation window");
        assert_eq!(
            self.glyph_count,
            buffer.len(),
            "glyph run and buffer disagree on the glyph count"
        );
        GlyphRunRef {
            run: self,
            glyph_ids: buffer.glyph_ids(),
            advances: buffer.advances(),
        }
    }

    /// Opens the mutation window.
    ///
    /// The run counts as unfinalized until the returned guard is dropped.
    pub(crate) fn begin_mutation(&mut self) -> GlyphRunMut<'_> {
        self.finalized = false;
        GlyphRunMut { run: self }
    }
}

/// Write access to a [`GlyphRun`] between construction and use.
///
/// Dropping the guard finalizes the run again.
#[derive(Debug)]
pub(crate) struct GlyphRunMut<'a> {
    run: &'a mut GlyphRun,
}

impl GlyphRunMut<'_> {
    pub(crate) fn set_baseline_origin(&mut self, origin: Point) {
        self.run.baseline_origin = origin;
    }

    pub(crate) fn set_glyph_count(&mut self, glyph_count: usize) {
        self.run.glyph_count = glyph_count;
    }
}

impl Drop for GlyphRunMut<'_> {
    fn drop(&mut self) {
        self.run.finalized = true;
    }
}

/// A glyph's index and horizontal offset from the run's baseline origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PositionedGlyph {
    /// The font-specific glyph index.
    pub id: u16,
    /// Offset from the baseline origin in device-independent pixels.
    pub x: f64,
}

/// A finalized [`GlyphRun`] together with views over its glyphs.
///
/// This is what a [`RenderSink`](crate::RenderSink) receives. It borrows the
/// drawer's buffer, so it can't outlive the call that produced it.
#[derive(Copy, Clone, Debug)]
pub struct GlyphRunRef<'a> {
    run: &'a GlyphRun,
    glyph_ids: &'a [u16],
    advances: &'a [f64],
}

impl<'a> GlyphRunRef<'a> {
    /// The underlying run.
    pub fn run(&self) -> &'a GlyphRun {
        self.run
    }

    /// The typeface all glyphs come from.
    pub fn typeface(&self) -> &'a Typeface {
        &self.run.typeface
    }

    /// Font size in device-independent pixels per em.
    pub fn font_size(&self) -> f64 {
        self.run.font_size
    }

    /// Device pixels per device-independent pixel.
    pub fn pixels_per_dip(&self) -> f32 {
        self.run.pixels_per_dip
    }

    /// Position of the first glyph's origin on the baseline.
    pub fn baseline_origin(&self) -> Point {
        self.run.baseline_origin
    }

    /// Glyph indices, in order.
    pub fn glyph_ids(&self) -> &'a [u16] {
        self.glyph_ids
    }

    /// Advance of each glyph in device-independent pixels.
    pub fn advances(&self) -> &'a [f64] {
        self.advances
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.glyph_ids.len()
    }

    /// Whether the run has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyph_ids.is_empty()
    }

    /// Total advance of the run.
    pub fn advance(&self) -> f64 {
        self.advances.iter().sum()
    }

    /// Iterates over glyphs with their offsets from the baseline origin.
    pub fn positioned_glyphs(&self) -> impl Iterator<Item = PositionedGlyph> + 'a {
        self.glyph_ids
            .iter()
            .zip(self.advances)
            .scan(0.0, |pen_x, (&id, &advance)| {
                let x = *pen_x;
                *pen_x += advance;
                Some(PositionedGlyph { id, x })
            })
    }
}
