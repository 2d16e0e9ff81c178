// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A test environment that builds every kind of drawer for one typeface.

use std::sync::Arc;

use runkit::peniko::color::palette::css::WHITE;
use runkit::peniko::kurbo::Point;
use runkit::{
    DrawerConfig, FormattedTextDrawer, GlyphRunBuilder, NaiveGlyphRunDrawer, RunStrategy,
    TextDrawer, Typeface,
};
use runkit_dev::{Recorded, RecordingSink};

/// A typeface mapping `A`-`Z` to glyphs 1-26 with unit advance 0.5.
pub(crate) fn face_with_baseline(baseline: f64) -> Arc<Typeface> {
    let chars = ('A'..='Z').zip(1..);
    let advances = (1..=26).map(|id| (id, 0.5));
    Arc::new(Typeface::from_maps(chars, advances, baseline))
}

#[derive(Debug)]
pub(crate) struct TestEnv {
    name: &'static str,
    typeface: Arc<Typeface>,
    config: DrawerConfig,
}

impl TestEnv {
    /// Creates an environment for `typeface`, or the synthetic monospace face.
    pub(crate) fn new(name: &'static str, typeface: Option<Arc<Typeface>>) -> Self {
        Self {
            name,
            typeface: typeface.unwrap_or_else(|| Arc::new(runkit_dev::monospace_typeface())),
            config: DrawerConfig::new().font_size(runkit_dev::FONT_SIZE),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn typeface(&self) -> &Arc<Typeface> {
        &self.typeface
    }

    pub(crate) fn config_mut(&mut self) -> &mut DrawerConfig {
        &mut self.config
    }

    /// A builder that updates one descriptor in place.
    pub(crate) fn fast(&self) -> GlyphRunBuilder {
        let config = self.config.clone().strategy(RunStrategy::InPlace);
        GlyphRunBuilder::new(self.typeface.clone(), &config)
            .unwrap_or_else(|err| panic!("{}: {err}", self.name))
    }

    /// A builder that creates a descriptor per call.
    pub(crate) fn per_call(&self) -> GlyphRunBuilder {
        let config = self.config.clone().strategy(RunStrategy::PerCall);
        GlyphRunBuilder::new(self.typeface.clone(), &config)
            .unwrap_or_else(|err| panic!("{}: {err}", self.name))
    }

    pub(crate) fn naive(&self) -> NaiveGlyphRunDrawer {
        NaiveGlyphRunDrawer::new(self.typeface.clone(), &self.config)
            .unwrap_or_else(|err| panic!("{}: {err}", self.name))
    }

    pub(crate) fn formatted(&self) -> FormattedTextDrawer {
        FormattedTextDrawer::new(self.typeface.clone(), &self.config)
            .unwrap_or_else(|err| panic!("{}: {err}", self.name))
    }

    /// Draws `text` in white and returns what the sink received, if anything.
    pub(crate) fn draw(
        &self,
        drawer: &mut impl TextDrawer,
        text: &str,
        origin: Point,
    ) -> Option<Recorded> {
        let mut sink = RecordingSink::new();
        drawer.draw_text(text, origin, WHITE, &mut sink);
        assert!(
            sink.calls.len() <= 1,
            "{}: one draw call produced {} sink calls",
            self.name,
            sink.calls.len()
        );
        sink.calls.pop()
    }
}
