// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Render Benchmarks
//!
//! Benchmarks for drawing the sample set into a Tiny Skia pixmap.

use runkit::renderers::tiny_skia::TinySkiaSink;
use runkit::{
    FormattedTextDrawer, GlyphRunBuilder, NaiveGlyphRunDrawer, RunStrategy, TextDrawer,
};
use runkit_dev::{SURFACE_HEIGHT, SURFACE_WIDTH};
use tango_bench::{Benchmark, benchmark_fn};
use tiny_skia::{Color, Pixmap};

use crate::benches::draw_samples;
use crate::{config, typeface};

fn render_samples<D: TextDrawer>(drawer: &mut D, pixmap: &mut Pixmap) {
    pixmap.fill(Color::TRANSPARENT);
    let mut sink = TinySkiaSink::new(pixmap.as_mut());
    draw_samples(drawer, &mut sink);
}

/// Benchmark for each strategy rendering the sample set.
pub fn render() -> Vec<Benchmark> {
    vec![
        benchmark_fn("Render - formatted text", |b| {
            let mut drawer = FormattedTextDrawer::new(typeface(), &config()).unwrap();
            let mut pixmap = Pixmap::new(SURFACE_WIDTH, SURFACE_HEIGHT).unwrap();
            b.iter(move || render_samples(&mut drawer, &mut pixmap))
        }),
        benchmark_fn("Render - naive glyph run", |b| {
            let mut drawer = NaiveGlyphRunDrawer::new(typeface(), &config()).unwrap();
            let mut pixmap = Pixmap::new(SURFACE_WIDTH, SURFACE_HEIGHT).unwrap();
            b.iter(move || render_samples(&mut drawer, &mut pixmap))
        }),
        benchmark_fn("Render - fast glyph run", |b| {
            let config = config().strategy(RunStrategy::InPlace);
            let mut drawer = GlyphRunBuilder::new(typeface(), &config).unwrap();
            let mut pixmap = Pixmap::new(SURFACE_WIDTH, SURFACE_HEIGHT).unwrap();
            b.iter(move || render_samples(&mut drawer, &mut pixmap))
        }),
    ]
}
