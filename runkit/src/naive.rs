// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph runs resolved straight from the typeface maps.

use alloc::sync::Arc;

use peniko::Color;
use peniko::kurbo::Point;

use crate::buffer::RunBuffer;
use crate::config::DrawerConfig;
use crate::error::ConfigError;
use crate::math::baseline_offset;
use crate::metrics::GlyphMetrics;
use crate::run::GlyphRun;
use crate::sink::{RenderSink, TextDrawer};
use crate::typeface::Typeface;

/// Draws glyph runs without a metrics table.
///
/// Every character costs two hash probes into the [`Typeface`], and every call
/// creates a new [`GlyphRun`]. Output is identical to
/// [`GlyphRunBuilder`](crate::GlyphRunBuilder).
#[derive(Clone, Debug)]
pub struct NaiveGlyphRunDrawer {
    typeface: Arc<Typeface>,
    font_size: f64,
    pixels_per_dip: f32,
    buffer: RunBuffer,
}

impl NaiveGlyphRunDrawer {
    /// Creates a drawer for `typeface` with the settings from `config`.
    ///
    /// `config.strategy` is ignored.
    pub fn new(typeface: Arc<Typeface>, config: &DrawerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            typeface,
            font_size: config.font_size,
            pixels_per_dip: config.pixels_per_dip(),
            buffer: RunBuffer::with_capacity(config.initial_capacity),
        })
    }

    /// The glyph buffer as left by the last call.
    pub fn buffer(&self) -> &RunBuffer {
        &self.buffer
    }

    fn metrics(&self, c: char) -> GlyphMetrics {
        match self.typeface.glyph_index(c) {
            Some(glyph_id) => GlyphMetrics {
                glyph_id,
                advance: self.typeface.advance_width(glyph_id).unwrap_or(0.0) * self.font_size,
            },
            None => GlyphMetrics::SENTINEL,
        }
    }
}

impl TextDrawer for NaiveGlyphRunDrawer {
    fn draw_text<S: RenderSink + ?Sized>(
        &mut self,
        text: &str,
        origin: Point,
        color: Color,
        sink: &mut S,
    ) {
        if text.is_empty() {
            return;
        }
        self.buffer.ensure_capacity_for(text);
        let mut len = 0;
        for (i, c) in text.chars().enumerate() {
            let GlyphMetrics { glyph_id, advance } = self.metrics(c);
            self.buffer.set(i, glyph_id, advance);
            len = i + 1;
        }
        self.buffer.commit(len);

        let offset = baseline_offset(self.typeface.baseline(), self.font_size);
        let run = GlyphRun::new(
            self.typeface.clone(),
            self.font_size,
            self.pixels_per_dip,
            Point::new(origin.x, origin.y + offset),
            len,
        );
        sink.fill_glyph_run(color, run.bind(&self.buffer));
    }
}
