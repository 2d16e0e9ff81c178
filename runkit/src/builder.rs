// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The table-driven glyph run drawer.

use alloc::sync::Arc;

use peniko::Color;
use peniko::kurbo::Point;

use crate::buffer::RunBuffer;
use crate::config::{DrawerConfig, RunStrategy};
use crate::error::ConfigError;
use crate::metrics::{GlyphMetrics, GlyphMetricsTable};
use crate::run::GlyphRun;
use crate::sink::{RenderSink, TextDrawer};
use crate::typeface::Typeface;

/// Draws text as glyph runs without allocating once warmed up.
///
/// Per character the builder does a single [`GlyphMetricsTable`] lookup and
/// writes the result into a [`RunBuffer`] it reuses for every call. With
/// [`RunStrategy::InPlace`] the run descriptor is also reused: it is created
/// once and only its origin and glyph count change between calls.
///
/// ```
/// use std::sync::Arc;
///
/// use runkit::peniko::color::palette::css::WHITE;
/// use runkit::peniko::kurbo::Point;
/// use runkit::{DrawerConfig, GlyphRunBuilder, TextDrawer, Typeface};
/// # use runkit::{FormattedText, GlyphRunRef, RenderSink};
/// # struct Count(usize);
/// # impl RenderSink for Count {
/// #     fn fill_glyph_run(&mut self, _: runkit::peniko::Color, run: GlyphRunRef<'_>) {
/// #         self.0 += run.len();
/// #     }
/// #     fn draw_formatted_text(&mut self, _: &FormattedText, _: Point) {}
/// # }
///
/// let face = Arc::new(Typeface::from_maps([('a', 1), ('b', 2)], [(1, 0.6), (2, 0.6)], 0.8));
/// let mut builder = GlyphRunBuilder::new(face, &DrawerConfig::default()).unwrap();
/// let mut sink = Count(0);
/// builder.draw_text("abba", Point::new(10.0, 5.0), WHITE, &mut sink);
/// assert_eq!(sink.0, 4);
/// assert_eq!(builder.last_run().baseline_origin(), Point::new(10.0, 18.0));
/// ```
#[derive(Clone, Debug)]
pub struct GlyphRunBuilder {
    table: Arc<GlyphMetricsTable>,
    buffer: RunBuffer,
    run: GlyphRun,
    strategy: RunStrategy,
    baseline_offset: f64,
}

impl GlyphRunBuilder {
    /// Creates a builder with its own metrics table for `typeface`.
    pub fn new(typeface: Arc<Typeface>, config: &DrawerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = Arc::new(GlyphMetricsTable::build(&typeface, config.font_size));
        Ok(Self::assemble(table, typeface, config))
    }

    /// Creates a builder that shares an existing metrics table.
    ///
    /// The table must have been built from `typeface`. Its font size takes
    /// precedence over the one in `config`.
    pub fn with_table(
        table: Arc<GlyphMetricsTable>,
        typeface: Arc<Typeface>,
        config: &DrawerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(table, typeface, config))
    }

    /// Resolves `config.family` through `library` and creates a builder for it.
    #[cfg(feature = "system")]
    pub fn from_config(
        config: &DrawerConfig,
        library: &mut crate::FontLibrary,
    ) -> Result<Self, crate::Error> {
        config.validate()?;
        let typeface = Arc::new(library.resolve(&config.family)?);
        Ok(Self::new(typeface, config)?)
    }

    fn assemble(
        table: Arc<GlyphMetricsTable>,
        typeface: Arc<Typeface>,
        config: &DrawerConfig,
    ) -> Self {
        let run = GlyphRun::new(
            typeface,
            table.font_size(),
            config.pixels_per_dip(),
            Point::ZERO,
            0,
        );
        Self {
            baseline_offset: table.baseline_offset(),
            table,
            buffer: RunBuffer::with_capacity(config.initial_capacity),
            run,
            strategy: config.strategy,
        }
    }

    /// The metrics table, for sharing with other builders.
    pub fn table(&self) -> &Arc<GlyphMetricsTable> {
        &self.table
    }

    /// The glyph buffer as left by the last call.
    pub fn buffer(&self) -> &RunBuffer {
        &self.buffer
    }

    /// How run descriptors are produced.
    pub fn strategy(&self) -> RunStrategy {
        self.strategy
    }

    /// The long-lived run descriptor.
    ///
    /// With [`RunStrategy::PerCall`] this is never updated after construction.
    pub fn last_run(&self) -> &GlyphRun {
        &self.run
    }

    /// Fills the buffer with the metrics of each character in `text` and
    /// returns the character count.
    fn fill(&mut self, text: &str) -> usize {
        self.buffer.ensure_capacity_for(text);
        let mut len = 0;
        for (i, c) in text.chars().enumerate() {
            let GlyphMetrics { glyph_id, advance } = self.table.lookup(c);
            self.buffer.set(i, glyph_id, advance);
            len = i + 1;
        }
        self.buffer.commit(len);
        len
    }
}

impl TextDrawer for GlyphRunBuilder {
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
        let glyph_count = self.fill(text);
        let origin = Point::new(origin.x, origin.y + self.baseline_offset);
        match self.strategy {
            RunStrategy::InPlace => {
                update_in_place(&mut self.run, origin, glyph_count);
                sink.fill_glyph_run(color, self.run.bind(&self.buffer));
            }
            RunStrategy::PerCall => {
                let run = GlyphRun::new(
                    self.run.typeface().clone(),
                    self.run.font_size(),
                    self.run.pixels_per_dip(),
                    origin,
                    glyph_count,
                );
                sink.fill_glyph_run(color, run.bind(&self.buffer));
            }
        }
    }
}

/// Points a finalized run at new glyphs.
///
/// The run is unfinalized only while the guard is alive.
pub(crate) fn update_in_place(run: &mut GlyphRun, origin: Point, glyph_count: usize) {
    let mut run = run.begin_mutation();
    run.set_baseline_origin(origin);
    run.set_glyph_count(glyph_count);
}
