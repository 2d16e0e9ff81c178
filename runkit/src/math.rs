// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mathematical helper functions.

#[cfg(feature = "libm")]
#[allow(unused_imports, reason = "only needed when `std` is disabled")]
use core_maths::CoreFloat;

/// Vertical distance from the top of the line box to the baseline, snapped
/// to a whole pixel.
///
/// Glyphs drawn from a fractional baseline land between pixel rows and come
/// out visibly offset, so the offset is always rounded.
#[inline]
pub(crate) fn baseline_offset(baseline: f64, font_size: f64) -> f64 {
    (baseline * font_size).round()
}

#[cfg(test)]
mod tests {
    use super::baseline_offset;

    #[test]
    fn rounds_to_whole_pixels() {
        assert_eq!(baseline_offset(0.75, 16.0), 12.0);
        // 0.8 * 16 = 12.8
        assert_eq!(baseline_offset(0.8, 16.0), 13.0);
        // 0.76 * 16 = 12.16
        assert_eq!(baseline_offset(0.76, 16.0), 12.0);
        // 0.8 * 13 = 10.4
        assert_eq!(baseline_offset(0.8, 13.0), 10.0);
    }
}
