// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implements [`RenderSink`] for Tiny Skia's [`PixmapMut`].

use peniko::Color;
use peniko::kurbo::Point;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlineGlyphCollection, OutlinePen};
use skrifa::{FontRef, GlyphId, MetadataProvider};
use tiny_skia::{FillRule, Paint, PathBuilder, PixmapMut, Transform};

use crate::formatted::FormattedText;
use crate::run::{GlyphRunRef, PositionedGlyph};
use crate::sink::RenderSink;
use crate::typeface::Typeface;

/// A [`RenderSink`] that fills glyph outlines into a pixmap.
///
/// Outlines are drawn unhinted at `font_size * pixels_per_dip`, so a run
/// positioned in device-independent pixels lands on the right device pixels.
/// Typefaces built without font data draw nothing.
pub struct TinySkiaSink<'a> {
    pen: Pen<'a>,
}

impl core::fmt::Debug for TinySkiaSink<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TinySkiaSink")
            .field("width", &self.pen.pixmap.width())
            .field("height", &self.pen.pixmap.height())
            .finish_non_exhaustive()
    }
}

impl<'a> TinySkiaSink<'a> {
    /// Creates a sink drawing into `pixmap`.
    pub fn new(pixmap: PixmapMut<'a>) -> Self {
        Self {
            pen: Pen {
                pixmap,
                x: 0.0,
                y: 0.0,
                paint: Paint::default(),
                open_path: PathBuilder::new(),
            },
        }
    }

    fn draw_glyphs(
        &mut self,
        typeface: &Typeface,
        font_size: f64,
        pixels_per_dip: f32,
        origin: Point,
        color: Color,
        glyphs: impl Iterator<Item = PositionedGlyph>,
    ) {
        let Some((data, index)) = typeface.outline_data() else {
            return;
        };
        let Ok(font) = FontRef::from_index(data.as_ref(), index) else {
            return;
        };
        let outlines = font.outline_glyphs();
        let scale = f64::from(pixels_per_dip);
        self.pen.set_color(color);
        for glyph in glyphs {
            self.pen.set_origin(
                to_f32((origin.x + glyph.x) * scale),
                to_f32(origin.y * scale),
            );
            self.pen
                .draw_glyph(&outlines, glyph.id, to_f32(font_size * scale));
        }
    }
}

impl RenderSink for TinySkiaSink<'_> {
    fn fill_glyph_run(&mut self, color: Color, run: GlyphRunRef<'_>) {
        self.draw_glyphs(
            run.typeface(),
            run.font_size(),
            run.pixels_per_dip(),
            run.baseline_origin(),
            color,
            run.positioned_glyphs(),
        );
    }

    fn draw_formatted_text(&mut self, text: &FormattedText, origin: Point) {
        let baseline_origin = Point::new(origin.x, origin.y + text.baseline());
        let glyphs = text.glyphs().scan(0.0, |pen_x, glyph| {
            let x = *pen_x;
            *pen_x += glyph.advance;
            Some(PositionedGlyph {
                id: glyph.glyph_id,
                x,
            })
        });
        self.draw_glyphs(
            text.typeface(),
            text.font_size(),
            text.pixels_per_dip(),
            baseline_origin,
            text.color(),
            glyphs,
        );
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "pixel sizes and coordinates fit comfortably in f32"
)]
fn to_f32(value: f64) -> f32 {
    value as f32
}

/// Turns skrifa outline commands into filled Tiny Skia paths.
struct Pen<'a> {
    pixmap: PixmapMut<'a>,
    x: f32,
    y: f32,
    paint: Paint<'static>,
    open_path: PathBuilder,
}

impl Pen<'_> {
    fn set_origin(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn set_color(&mut self, color: Color) {
        let rgba8 = color.to_rgba8();
        self.paint
            .set_color(tiny_skia::Color::from_rgba8(rgba8.r, rgba8.g, rgba8.b, rgba8.a));
    }

    fn draw_glyph(&mut self, outlines: &OutlineGlyphCollection<'_>, id: u16, size: f32) {
        let Some(glyph) = outlines.get(GlyphId::from(id)) else {
            return;
        };
        let settings = DrawSettings::unhinted(Size::new(size), LocationRef::default());
        if let Err(err) = glyph.draw(settings, self) {
            log::debug!("failed to draw glyph {id}: {err}");
        }
        let builder = core::mem::replace(&mut self.open_path, PathBuilder::new());
        if let Some(path) = builder.finish() {
            self.pixmap.fill_path(
                &path,
                &self.paint,
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}

impl OutlinePen for Pen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.open_path.move_to(self.x + x, self.y - y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.open_path.line_to(self.x + x, self.y - y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.open_path
            .quad_to(self.x + cx0, self.y - cy0, self.x + x, self.y - y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.open_path.cubic_to(
            self.x + cx0,
            self.y - cy0,
            self.x + cx1,
            self.y - cy1,
            self.x + x,
            self.y - y,
        );
    }

    fn close(&mut self) {
        self.open_path.close();
    }
}
