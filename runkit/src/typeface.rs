// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved fonts and their native character and advance maps.

use core::fmt::{Debug, Formatter};

use hashbrown::HashMap;
use linebender_resource_handle::Blob;
use skrifa::instance::{LocationRef, Size};
use skrifa::{FontRef, MetadataProvider};

use crate::error::{UnsupportedFontError, UnsupportedFontKind};

/// A font resolved to the maps glyph runs are built from.
///
/// This mirrors what a platform font API exposes for a face: a
/// character-to-glyph map, a glyph-to-advance map in em units, and the
/// ascent-to-baseline ratio. Lookups go through hash maps; drawers that need
/// to be fast build a [`GlyphMetricsTable`](crate::GlyphMetricsTable) from it
/// once instead.
#[derive(Clone)]
pub struct Typeface {
    character_map: HashMap<u32, u16>,
    advance_widths: HashMap<u16, f64>,
    baseline: f64,
    outlines: Option<(Blob<u8>, u32)>,
}

impl Debug for Typeface {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Typeface")
            .field("character_map", &self.character_map.len())
            .field("advance_widths", &self.advance_widths.len())
            .field("baseline", &self.baseline)
            .field("outlines", &self.outlines.as_ref().map(|(_, index)| index))
            .finish()
    }
}

impl Typeface {
    /// Reads the maps from OpenType font data.
    ///
    /// `index` selects the face within a font collection; use 0 for a plain
    /// font file.
    pub fn from_font_data(data: Blob<u8>, index: u32) -> Result<Self, UnsupportedFontError> {
        let font = FontRef::from_index(data.as_ref(), index)
            .map_err(|_| UnsupportedFontError::new(UnsupportedFontKind::ParseFailed))?;

        if font.outline_glyphs().format().is_none() {
            return Err(UnsupportedFontError::new(UnsupportedFontKind::NoOutlines));
        }

        let metrics = font.metrics(Size::unscaled(), LocationRef::default());
        if metrics.units_per_em == 0 {
            return Err(UnsupportedFontError::new(UnsupportedFontKind::ParseFailed));
        }
        let upem = f64::from(metrics.units_per_em);
        let glyph_metrics = font.glyph_metrics(Size::unscaled(), LocationRef::default());

        let mut character_map = HashMap::new();
        let mut advance_widths = HashMap::new();
        for (codepoint, glyph_id) in font.charmap().mappings() {
            // Runs store 16-bit glyph indices.
            let Ok(id) = u16::try_from(glyph_id.to_u32()) else {
                continue;
            };
            character_map.insert(codepoint, id);
            if !advance_widths.contains_key(&id) {
                if let Some(advance) = glyph_metrics.advance_width(glyph_id) {
                    advance_widths.insert(id, f64::from(advance) / upem);
                }
            }
        }
        if character_map.is_empty() {
            return Err(UnsupportedFontError::new(
                UnsupportedFontKind::NoCharacterMap,
            ));
        }

        let baseline = f64::from(metrics.ascent) / upem;
        log::trace!(
            "parsed typeface: {} mapped characters, {} advances, baseline {baseline}",
            character_map.len(),
            advance_widths.len(),
        );

        Ok(Self {
            character_map,
            advance_widths,
            baseline,
            outlines: Some((data, index)),
        })
    }

    /// Builds a typeface from explicit maps.
    ///
    /// Advances are in em units. The resulting typeface has no outlines, so
    /// rasterizing sinks draw nothing for it; it is meant for custom font
    /// sources and for tests.
    pub fn from_maps(
        characters: impl IntoIterator<Item = (char, u16)>,
        advances: impl IntoIterator<Item = (u16, f64)>,
        baseline: f64,
    ) -> Self {
        Self {
            character_map: characters
                .into_iter()
                .map(|(c, id)| (u32::from(c), id))
                .collect(),
            advance_widths: advances.into_iter().collect(),
            baseline,
            outlines: None,
        }
    }

    /// Distance from the top of the line box to the baseline, as a fraction
    /// of the font size.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Returns the glyph index mapped to `c`, if any.
    #[inline]
    pub fn glyph_index(&self, c: char) -> Option<u16> {
        self.character_map.get(&u32::from(c)).copied()
    }

    /// Returns the advance width of a glyph in em units, if known.
    #[inline]
    pub fn advance_width(&self, glyph_id: u16) -> Option<f64> {
        self.advance_widths.get(&glyph_id).copied()
    }

    /// Iterates over every `(codepoint, glyph index)` pair, in no particular order.
    pub fn mappings(&self) -> impl Iterator<Item = (u32, u16)> + '_ {
        self.character_map.iter().map(|(c, id)| (*c, *id))
    }

    /// Number of characters the font maps.
    pub fn mapped_count(&self) -> usize {
        self.character_map.len()
    }

    /// The font data and collection index outlines are read from, if this
    /// typeface was built from font data.
    pub fn outline_data(&self) -> Option<(&Blob<u8>, u32)> {
        self.outlines.as_ref().map(|(data, index)| (data, *index))
    }
}
