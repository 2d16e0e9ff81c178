// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing through a freshly allocated text object per call.

use alloc::string::String;
use alloc::sync::Arc;

use peniko::Color;
use peniko::kurbo::Point;

use crate::config::DrawerConfig;
use crate::error::ConfigError;
use crate::metrics::GlyphMetrics;
use crate::sink::{RenderSink, TextDrawer};
use crate::typeface::Typeface;

/// A string plus everything needed to draw it.
///
/// Unlike a [`GlyphRun`](crate::GlyphRun), formatted text owns a copy of its
/// string and leaves glyph resolution to the sink, which has to consult the
/// typeface for every character each time it draws.
#[derive(Clone, Debug)]
pub struct FormattedText {
    text: String,
    typeface: Arc<Typeface>,
    font_size: f64,
    pixels_per_dip: f32,
    color: Color,
}

impl FormattedText {
    /// Copies `text` into a new formatted text object.
    pub fn new(
        text: &str,
        typeface: Arc<Typeface>,
        font_size: f64,
        pixels_per_dip: f32,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            typeface,
            font_size,
            pixels_per_dip,
            color,
        }
    }

    /// The text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The typeface.
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

    /// The foreground color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Distance from the top of the line box to the baseline.
    ///
    /// Not snapped to whole pixels.
    pub fn baseline(&self) -> f64 {
        self.typeface.baseline() * self.font_size
    }

    /// Resolves each character through the typeface's maps.
    ///
    /// Unmapped characters yield [`GlyphMetrics::SENTINEL`].
    pub fn glyphs(&self) -> impl Iterator<Item = GlyphMetrics> + '_ {
        self.text.chars().map(|c| match self.typeface.glyph_index(c) {
            Some(glyph_id) => GlyphMetrics {
                glyph_id,
                advance: self.typeface.advance_width(glyph_id).unwrap_or(0.0) * self.font_size,
            },
            None => GlyphMetrics::SENTINEL,
        })
    }

    /// Total advance of the text.
    pub fn width(&self) -> f64 {
        self.glyphs().map(|glyph| glyph.advance).sum()
    }
}

/// Draws text by handing a new [`FormattedText`] to the sink on every call.
///
/// This is the slowest strategy and the reference the glyph run drawers are
/// compared against.
#[derive(Clone, Debug)]
pub struct FormattedTextDrawer {
    typeface: Arc<Typeface>,
    font_size: f64,
    pixels_per_dip: f32,
}

impl FormattedTextDrawer {
    /// Creates a drawer for `typeface` with the size and resolution from `config`.
    pub fn new(typeface: Arc<Typeface>, config: &DrawerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            typeface,
            font_size: config.font_size,
            pixels_per_dip: config.pixels_per_dip(),
        })
    }
}

impl TextDrawer for FormattedTextDrawer {
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
        let formatted = FormattedText::new(
            text,
            self.typeface.clone(),
            self.font_size,
            self.pixels_per_dip,
            color,
        );
        sink.draw_formatted_text(&formatted, origin);
    }
}
