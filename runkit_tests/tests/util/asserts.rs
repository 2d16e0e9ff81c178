// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Various helper functions to assert truths during testing.

use runkit_dev::{Recorded, RecordedRun, RecordedText};

/// Assert that two sink calls drew the same glyphs with the same advances.
pub(crate) fn assert_same_glyphs(a: &Recorded, b: &Recorded, case: &str) {
    let (a_ids, b_ids) = (a.glyph_ids(), b.glyph_ids());
    assert_eq!(
        a_ids.len(),
        b_ids.len(),
        "glyph count mismatch with {case}"
    );
    for (i, (id_a, id_b)) in a_ids.iter().zip(&b_ids).enumerate() {
        assert_eq!(id_a, id_b, "glyph {i} id mismatch with {case}");
    }
    for (i, (adv_a, adv_b)) in a.advances().iter().zip(&b.advances()).enumerate() {
        assert_eq!(adv_a, adv_b, "glyph {i} advance mismatch with {case}");
    }
}

/// Unwrap a sink call that must be a glyph run.
pub(crate) fn expect_run(recorded: Option<Recorded>, case: &str) -> RecordedRun {
    match recorded {
        Some(Recorded::Run(run)) => run,
        Some(Recorded::Text(_)) => panic!("expected a glyph run with {case}, got formatted text"),
        None => panic!("expected a glyph run with {case}, got nothing"),
    }
}

/// Unwrap a sink call that must be formatted text.
pub(crate) fn expect_text(recorded: Option<Recorded>, case: &str) -> RecordedText {
    match recorded {
        Some(Recorded::Text(text)) => text,
        Some(Recorded::Run(_)) => panic!("expected formatted text with {case}, got a glyph run"),
        None => panic!("expected formatted text with {case}, got nothing"),
    }
}
