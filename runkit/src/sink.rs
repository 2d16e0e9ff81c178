// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between drawers and whatever rasterizes their output.

use peniko::Color;
use peniko::kurbo::Point;

use crate::formatted::FormattedText;
use crate::run::GlyphRunRef;

/// Trait for types that can render text.
///
/// Sinks are infallible at this boundary; a sink that can fail is expected to
/// record the failure itself.
pub trait RenderSink {
    /// Fill a glyph run with a solid color.
    ///
    /// The run borrows the drawer's buffer and is only valid for the duration
    /// of the call.
    fn fill_glyph_run(&mut self, color: Color, run: GlyphRunRef<'_>);

    /// Draw formatted text with the top-left of its line box at `origin`.
    fn draw_formatted_text(&mut self, text: &FormattedText, origin: Point);
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn fill_glyph_run(&mut self, color: Color, run: GlyphRunRef<'_>) {
        (**self).fill_glyph_run(color, run);
    }

    fn draw_formatted_text(&mut self, text: &FormattedText, origin: Point) {
        (**self).draw_formatted_text(text, origin);
    }
}

/// A strategy for turning strings into sink calls.
///
/// Every drawer treats the empty string as a no-op and places text so that
/// `origin` is the top-left corner of the line box.
pub trait TextDrawer {
    /// Draws `text` in `color` with the line box's top-left corner at `origin`.
    fn draw_text<S: RenderSink + ?Sized>(
        &mut self,
        text: &str,
        origin: Point,
        color: Color,
        sink: &mut S,
    );
}
