// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-size character to glyph metrics lookup.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use crate::math::baseline_offset;
use crate::typeface::Typeface;

/// The highest Unicode scalar value.
const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// Code points per page, as a power of two.
const PAGE_BITS: u32 = 8;
const PAGE_SIZE: usize = 1 << PAGE_BITS;
const PAGE_MASK: u32 = (1 << PAGE_BITS) - 1;

/// Number of pages needed to cover every code point.
const BLOCK_COUNT: usize = (MAX_CODEPOINT >> PAGE_BITS) as usize + 1;

/// Index of the shared page that every unmapped block points to.
const SENTINEL_PAGE: u16 = 0;

type Page = [GlyphMetrics; PAGE_SIZE];

/// Glyph index and advance of one character at a fixed size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GlyphMetrics {
    /// The font-specific glyph index.
    pub glyph_id: u16,
    /// Horizontal advance in device-independent pixels.
    pub advance: f64,
}

impl GlyphMetrics {
    /// Metrics substituted for characters the font does not map.
    ///
    /// Glyph 0 is the font's `.notdef` glyph; with a zero advance it overlaps
    /// whatever comes next.
    pub const SENTINEL: Self = Self {
        glyph_id: 0,
        advance: 0.0,
    };
}

/// Character to [`GlyphMetrics`] lookup for one typeface at one size.
///
/// Advances are scaled by the font size at build time so drawing only has to
/// copy entries. Storage is split into 256-character pages: a dense block
/// index covers all of Unicode and points at a page, and blocks the font
/// doesn't touch share one page of sentinel entries. A lookup is two array
/// loads and never hashes.
///
/// The table is immutable once built and can be shared between drawers.
#[derive(Clone)]
pub struct GlyphMetricsTable {
    blocks: Box<[u16]>,
    pages: Vec<Page>,
    baseline: f64,
    font_size: f64,
    mapped: usize,
}

impl Debug for GlyphMetricsTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphMetricsTable")
            .field("blocks", &self.blocks.len())
            .field("pages", &self.pages.len())
            .field("baseline", &self.baseline)
            .field("font_size", &self.font_size)
            .field("mapped", &self.mapped)
            .finish()
    }
}

impl GlyphMetricsTable {
    /// Builds the table by walking the typeface's character map once.
    ///
    /// `font_size` is in device-independent pixels and must be positive.
    /// Glyphs without a known advance get a zero advance.
    pub fn build(typeface: &Typeface, font_size: f64) -> Self {
        debug_assert!(
            font_size.is_finite() && font_size > 0.0,
            "font size must be positive and finite"
        );

        let mut blocks = vec![SENTINEL_PAGE; BLOCK_COUNT].into_boxed_slice();
        let mut pages: Vec<Page> = vec![[GlyphMetrics::SENTINEL; PAGE_SIZE]];
        let mut mapped = 0;

        for (codepoint, glyph_id) in typeface.mappings() {
            if codepoint > MAX_CODEPOINT {
                continue;
            }
            let block = (codepoint >> PAGE_BITS) as usize;
            if blocks[block] == SENTINEL_PAGE {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "there are at most 0x1100 pages besides the sentinel page"
                )]
                let page = pages.len() as u16;
                blocks[block] = page;
                pages.push([GlyphMetrics::SENTINEL; PAGE_SIZE]);
            }
            let advance = typeface.advance_width(glyph_id).unwrap_or(0.0) * font_size;
            pages[usize::from(blocks[block])][(codepoint & PAGE_MASK) as usize] =
                GlyphMetrics { glyph_id, advance };
            mapped += 1;
        }

        log::debug!(
            "built glyph metrics table at {font_size}px: {mapped} characters in {} pages",
            pages.len() - 1
        );

        Self {
            blocks,
            pages,
            baseline: typeface.baseline(),
            font_size,
            mapped,
        }
    }

    /// Returns the metrics for `c`, or [`GlyphMetrics::SENTINEL`] if the font
    /// doesn't map it.
    #[inline]
    pub fn lookup(&self, c: char) -> GlyphMetrics {
        self.lookup_code(u32::from(c))
    }

    /// Returns the metrics for a raw code point.
    ///
    /// Values beyond the Unicode range yield the sentinel.
    #[inline]
    pub fn lookup_code(&self, codepoint: u32) -> GlyphMetrics {
        let Some(&page) = self.blocks.get((codepoint >> PAGE_BITS) as usize) else {
            return GlyphMetrics::SENTINEL;
        };
        self.pages[usize::from(page)][(codepoint & PAGE_MASK) as usize]
    }

    /// Distance from the top of the line box to the baseline, as a fraction
    /// of the font size.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// The font size the advances were scaled to.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// The baseline offset in whole device-independent pixels.
    pub fn baseline_offset(&self) -> f64 {
        baseline_offset(self.baseline, self.font_size)
    }

    /// Number of characters with an entry of their own.
    pub fn mapped_count(&self) -> usize {
        self.mapped
    }

    /// Number of pages allocated for mapped characters.
    pub fn page_count(&self) -> usize {
        self.pages.len() - 1
    }
}
