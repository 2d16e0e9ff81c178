// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Benchmarks
//!
//! This module compares the drawing strategies against a sink that does no
//! rendering, so only the cost of producing glyph runs is measured.

use std::hint::black_box;
use std::sync::Arc;

use runkit::peniko::color::palette::css::WHITE;
use runkit::{
    FormattedTextDrawer, GlyphMetricsTable, GlyphRunBuilder, NaiveGlyphRunDrawer, RunStrategy,
    TextDrawer,
};
use runkit_dev::{FONT_SIZE, TEXT_ORIGIN};
use tango_bench::{Benchmark, benchmark_fn};

use crate::{NullSink, config, get_samples, typeface};

/// Draws every sample once.
pub(crate) fn draw_samples<D: TextDrawer, S: runkit::RenderSink>(drawer: &mut D, sink: &mut S) {
    for sample in get_samples() {
        drawer.draw_text(&sample.text, TEXT_ORIGIN, WHITE, sink);
    }
}

/// Benchmark for each strategy drawing the whole sample set.
pub fn draw_text() -> Vec<Benchmark> {
    vec![
        benchmark_fn("Draw Text - formatted text", |b| {
            let mut drawer = FormattedTextDrawer::new(typeface(), &config()).unwrap();
            b.iter(move || draw_samples(&mut drawer, &mut NullSink))
        }),
        benchmark_fn("Draw Text - naive glyph run", |b| {
            let mut drawer = NaiveGlyphRunDrawer::new(typeface(), &config()).unwrap();
            b.iter(move || draw_samples(&mut drawer, &mut NullSink))
        }),
        benchmark_fn("Draw Text - fast glyph run", |b| {
            let mut drawer = GlyphRunBuilder::new(typeface(), &config()).unwrap();
            b.iter(move || draw_samples(&mut drawer, &mut NullSink))
        }),
        benchmark_fn("Draw Text - fast glyph run, per-call descriptor", |b| {
            let config = config().strategy(RunStrategy::PerCall);
            let mut drawer = GlyphRunBuilder::new(typeface(), &config).unwrap();
            b.iter(move || draw_samples(&mut drawer, &mut NullSink))
        }),
    ]
}

/// Benchmark for the fast path on each sample on its own.
pub fn per_sample() -> Vec<Benchmark> {
    get_samples()
        .iter()
        .map(|sample| {
            benchmark_fn(format!("Fast Glyph Run - {}", sample.name), move |b| {
                let mut drawer = GlyphRunBuilder::new(typeface(), &config()).unwrap();
                b.iter(move || {
                    drawer.draw_text(&sample.text, TEXT_ORIGIN, WHITE, &mut NullSink);
                })
            })
        })
        .collect()
}

/// Benchmark for building the metrics table.
pub fn table_build() -> Vec<Benchmark> {
    vec![benchmark_fn("Metrics Table - build", |b| {
        let typeface: Arc<_> = typeface();
        b.iter(move || black_box(GlyphMetricsTable::build(&typeface, FONT_SIZE)))
    })]
}
