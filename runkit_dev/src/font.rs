// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small TrueType font built in memory.
//!
//! The font has four glyphs: `.notdef`, space, a box used for uppercase
//! letters and `é`, and a narrow bar used for lowercase letters. Digits and
//! punctuation are unmapped.

use std::sync::Arc;

use runkit::Typeface;
use runkit::peniko::Blob;
use write_fonts::FontBuilder;
use write_fonts::read::tables::glyf::CurvePoint;
use write_fonts::tables::cmap::Cmap;
use write_fonts::tables::glyf::{Bbox, Contour, GlyfLocaBuilder, SimpleGlyph};
use write_fonts::tables::head::Head;
use write_fonts::tables::hhea::Hhea;
use write_fonts::tables::hmtx::{Hmtx, LongMetric};
use write_fonts::tables::loca::LocaFormat;
use write_fonts::tables::maxp::Maxp;
use write_fonts::types::{FWord, GlyphId, UfWord};

/// Units per em of the box font.
pub const BOX_FONT_UPEM: u16 = 1000;

/// Ascender of the box font, in font units.
pub const BOX_FONT_ASCENDER: i16 = 800;

/// Descender of the box font, in font units.
pub const BOX_FONT_DESCENDER: i16 = -200;

/// Glyph of the box outline.
pub const BOX_GLYPH: u16 = 2;

/// Glyph of the bar outline.
pub const BAR_GLYPH: u16 = 3;

/// Advance of each glyph, in font units, indexed by glyph id.
pub const BOX_FONT_ADVANCES: [u16; 4] = [500, 250, 600, 300];

/// A character the font maps to a glyph index that does not fit in 16 bits.
pub const OUT_OF_RANGE_CHAR: char = '\u{1D538}';

const GLYPH_COUNT: u16 = 4;
const OUT_OF_RANGE_GLYPH: u32 = 70_000;

/// Which tables [`box_font_data`] writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxFont {
    /// Every table a drawer and a rasterizer need.
    Complete,
    /// No `glyf` and `loca`, so the font has no outlines.
    WithoutOutlines,
    /// No `cmap`, so no character maps to a glyph.
    WithoutCharacterMap,
}

/// The character map of the box font.
pub fn box_font_mappings() -> Vec<(char, u16)> {
    let mut mappings = vec![(' ', 1), ('é', BOX_GLYPH)];
    mappings.extend(('A'..='Z').map(|c| (c, BOX_GLYPH)));
    mappings.extend(('a'..='z').map(|c| (c, BAR_GLYPH)));
    mappings
}

/// Encodes the box font.
pub fn box_font_data(variant: BoxFont) -> Vec<u8> {
    let glyphs = [
        SimpleGlyph::default(),
        SimpleGlyph::default(),
        rectangle(50, 0, 550, 700),
        rectangle(100, 0, 200, 700),
    ];
    let mut glyf_loca = GlyfLocaBuilder::new();
    for glyph in &glyphs {
        glyf_loca.add_glyph(glyph).expect("box font glyphs are valid");
    }
    let (glyf, loca, loca_format) = glyf_loca.build();

    let mut builder = FontBuilder::new();
    let head = Head {
        units_per_em: BOX_FONT_UPEM,
        x_min: 0,
        y_min: 0,
        x_max: 550,
        y_max: 700,
        index_to_loc_format: match loca_format {
            LocaFormat::Short => 0,
            LocaFormat::Long => 1,
        },
        ..Default::default()
    };
    let hhea = Hhea {
        ascender: FWord::new(BOX_FONT_ASCENDER),
        descender: FWord::new(BOX_FONT_DESCENDER),
        line_gap: FWord::new(0),
        advance_width_max: UfWord::new(600),
        number_of_h_metrics: GLYPH_COUNT,
        ..Default::default()
    };
    let hmtx = Hmtx {
        h_metrics: BOX_FONT_ADVANCES
            .iter()
            .zip([0, 0, 50, 100])
            .map(|(&advance, side_bearing)| LongMetric {
                advance,
                side_bearing,
            })
            .collect(),
        left_side_bearings: Vec::new(),
    };
    let maxp = Maxp {
        num_glyphs: GLYPH_COUNT,
        ..Default::default()
    };
    builder
        .add_table(&head)
        .and_then(|b| b.add_table(&hhea))
        .and_then(|b| b.add_table(&hmtx))
        .and_then(|b| b.add_table(&maxp))
        .expect("box font metrics are valid");

    if variant != BoxFont::WithoutOutlines {
        builder
            .add_table(&glyf)
            .and_then(|b| b.add_table(&loca))
            .expect("box font outlines are valid");
    }
    if variant != BoxFont::WithoutCharacterMap {
        let mappings = box_font_mappings()
            .into_iter()
            .map(|(c, id)| (c, GlyphId::new(u32::from(id))))
            .chain([(OUT_OF_RANGE_CHAR, GlyphId::new(OUT_OF_RANGE_GLYPH))]);
        let cmap = Cmap::from_mappings(mappings).expect("box font mappings do not conflict");
        builder.add_table(&cmap).expect("box font cmap is valid");
    }
    builder.build()
}

/// The complete box font as a typeface.
pub fn box_typeface() -> Typeface {
    let data = Blob::new(Arc::new(box_font_data(BoxFont::Complete)));
    Typeface::from_font_data(data, 0).expect("the box font parses")
}

fn rectangle(x_min: i16, y_min: i16, x_max: i16, y_max: i16) -> SimpleGlyph {
    let contour = Contour::from(vec![
        CurvePoint::on_curve(x_min, y_min),
        CurvePoint::on_curve(x_min, y_max),
        CurvePoint::on_curve(x_max, y_max),
        CurvePoint::on_curve(x_max, y_min),
    ]);
    SimpleGlyph {
        bbox: Bbox {
            x_min,
            y_min,
            x_max,
            y_max,
        },
        contours: vec![contour],
        instructions: Vec::new(),
    }
}
