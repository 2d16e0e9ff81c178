// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regression tests for specific bugs.

use std::sync::Arc;

use runkit::Typeface;
use runkit::peniko::kurbo::Point;
use runkit_dev::{SENTENCE, TEXT_ORIGIN};

use crate::test_name;
use crate::util::{TestEnv, assert_same_glyphs, expect_run};

/// A long text followed by a short one must not leak the long text's tail.
#[test]
fn regression_short_text_after_growth() {
    let env = TestEnv::new(test_name!(), None);
    let mut fast = env.fast();
    let mut naive = env.naive();
    let long = SENTENCE.repeat(40);
    for text in [long.as_str(), "T", &long[..1500], "Th"] {
        let a = expect_run(env.draw(&mut fast, text, TEXT_ORIGIN), "in-place");
        let b = expect_run(env.draw(&mut naive, text, TEXT_ORIGIN), "naive");
        assert_eq!(a.glyph_ids.len(), text.chars().count());
        assert_eq!(a.glyph_ids, b.glyph_ids);
        assert_eq!(a.advances, b.advances);
    }
}

/// Characters outside the BMP are one glyph each, not two.
#[test]
fn regression_astral_characters_count_once() {
    let env = TestEnv::new(test_name!(), None);
    let mut fast = env.fast();
    let run = expect_run(
        env.draw(&mut fast, "\u{1F600}\u{1F601}A", TEXT_ORIGIN),
        env.name(),
    );
    assert_eq!(run.glyph_ids, [0, 0, 36]);
}

/// Unmapped characters must not pick up the advance of `.notdef`.
#[test]
fn regression_notdef_advance_is_not_used() {
    let face = Arc::new(Typeface::from_maps(
        [('a', 1)],
        [(0, 0.9), (1, 0.5)],
        0.75,
    ));
    let env = TestEnv::new(test_name!(), Some(face));
    let text = "a?a";
    let fast = env.draw(&mut env.fast(), text, TEXT_ORIGIN).unwrap();
    let naive = env.draw(&mut env.naive(), text, TEXT_ORIGIN).unwrap();
    let formatted = env.draw(&mut env.formatted(), text, TEXT_ORIGIN).unwrap();
    assert_eq!(fast.advances(), [8.0, 0.0, 8.0]);
    assert_same_glyphs(&fast, &naive, "naive");
    assert_same_glyphs(&fast, &formatted, "formatted");
}

/// An empty draw between two real ones must not disturb the descriptor.
#[test]
fn regression_empty_draw_keeps_descriptor() {
    let env = TestEnv::new(test_name!(), None);
    let mut fast = env.fast();
    env.draw(&mut fast, "This", Point::new(1.0, 2.0));
    assert!(env.draw(&mut fast, "", Point::new(50.0, 50.0)).is_none());
    assert_eq!(fast.last_run().glyph_count(), 4);
    assert_eq!(fast.last_run().baseline_origin(), Point::new(1.0, 14.0));
    assert_eq!(fast.buffer().len(), 4);
}
