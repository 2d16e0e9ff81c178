// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for loading typefaces and resolving families.

use std::sync::Arc;

use runkit::peniko::Blob;
use runkit::skrifa::instance::{LocationRef, Size};
use runkit::skrifa::{FontRef, GlyphId, MetadataProvider};
use runkit::{
    ConfigErrorKind, DrawerConfig, Error, FontLibrary, GlyphMetricsTable, GlyphRunBuilder,
    Typeface, UnsupportedFontKind,
};
use runkit_dev::{
    BOX_FONT_ADVANCES, BOX_FONT_ASCENDER, BOX_FONT_UPEM, BOX_GLYPH, BoxFont, OUT_OF_RANGE_CHAR,
    TEXT_ORIGIN, box_font_data, box_font_mappings,
};

use crate::test_name;
use crate::util::{TestEnv, assert_same_glyphs};

#[test]
fn fonts_reject_non_font_data() {
    let err = Typeface::from_font_data(Blob::new(Arc::new(vec![0_u8; 64])), 0).unwrap_err();
    assert_eq!(err.kind(), UnsupportedFontKind::ParseFailed);
    assert_eq!(err.family(), None);
}

#[test]
fn fonts_reject_empty_data() {
    let err = Typeface::from_font_data(Blob::new(Arc::new(Vec::new())), 0).unwrap_err();
    assert_eq!(err.kind(), UnsupportedFontKind::ParseFailed);
}

#[test]
fn fonts_box_font_matches_skrifa_metrics() {
    let data = Blob::new(Arc::new(box_font_data(BoxFont::Complete)));
    let typeface = Typeface::from_font_data(data.clone(), 0).unwrap();

    let font = FontRef::new(data.as_ref()).unwrap();
    let metrics = font.metrics(Size::unscaled(), LocationRef::default());
    let glyph_metrics = font.glyph_metrics(Size::unscaled(), LocationRef::default());
    assert_eq!(metrics.units_per_em, BOX_FONT_UPEM);
    let upem = f64::from(metrics.units_per_em);

    assert_eq!(typeface.baseline(), f64::from(metrics.ascent) / upem);
    assert_eq!(
        typeface.baseline(),
        f64::from(BOX_FONT_ASCENDER) / f64::from(BOX_FONT_UPEM)
    );
    assert_eq!(typeface.mapped_count(), box_font_mappings().len());
    assert_eq!(typeface.outline_data().map(|(_, index)| index), Some(0));

    for (c, id) in box_font_mappings() {
        assert_eq!(typeface.glyph_index(c), Some(id), "mapping of {c:?}");
        let advance = glyph_metrics.advance_width(GlyphId::from(id)).unwrap();
        assert_eq!(typeface.advance_width(id), Some(f64::from(advance) / upem));
        assert_eq!(
            typeface.advance_width(id),
            Some(f64::from(BOX_FONT_ADVANCES[usize::from(id)]) / upem)
        );
    }
}

#[test]
fn fonts_box_font_table_scales_advances() {
    let typeface = runkit_dev::box_typeface();
    let table = GlyphMetricsTable::build(&typeface, 16.0);
    let metrics = table.lookup('A');
    assert_eq!(metrics.glyph_id, BOX_GLYPH);
    assert_eq!(metrics.advance, 600.0 / 1000.0 * 16.0);
    assert_eq!(table.lookup('é'), metrics);
    assert_eq!(table.lookup('0').glyph_id, 0, "digits are unmapped");
    // 0.8 * 16 = 12.8
    assert_eq!(table.baseline_offset(), 13.0);
}

#[test]
fn fonts_skip_glyph_ids_beyond_u16() {
    let typeface = runkit_dev::box_typeface();
    assert_eq!(typeface.glyph_index(OUT_OF_RANGE_CHAR), None);
    assert!(typeface.mappings().all(|(c, _)| c != u32::from(OUT_OF_RANGE_CHAR)));
    let table = GlyphMetricsTable::build(&typeface, 16.0);
    assert_eq!(table.lookup(OUT_OF_RANGE_CHAR).glyph_id, 0);
}

#[test]
fn fonts_reject_fonts_without_outlines() {
    let data = Blob::new(Arc::new(box_font_data(BoxFont::WithoutOutlines)));
    let err = Typeface::from_font_data(data, 0).unwrap_err();
    assert_eq!(err.kind(), UnsupportedFontKind::NoOutlines);
}

#[test]
fn fonts_reject_fonts_without_character_map() {
    let data = Blob::new(Arc::new(box_font_data(BoxFont::WithoutCharacterMap)));
    let err = Typeface::from_font_data(data, 0).unwrap_err();
    assert_eq!(err.kind(), UnsupportedFontKind::NoCharacterMap);
}

#[test]
fn fonts_box_font_draws_consistently() {
    let env = TestEnv::new(test_name!(), Some(Arc::new(runkit_dev::box_typeface())));
    let mut fast = env.fast();
    let mut naive = env.naive();
    for sample in runkit_dev::samples() {
        let a = env.draw(&mut fast, &sample.text, TEXT_ORIGIN);
        let b = env.draw(&mut naive, &sample.text, TEXT_ORIGIN);
        if let (Some(a), Some(b)) = (a, b) {
            assert_same_glyphs(&a, &b, sample.name);
        }
    }
}

#[test]
fn fonts_unknown_family_fails_construction() {
    let mut library = FontLibrary::empty();
    let config = DrawerConfig::new().family("Definitely Not Installed");
    let err = GlyphRunBuilder::from_config(&config, &mut library).unwrap_err();
    match err {
        Error::UnsupportedFont(err) => {
            assert_eq!(err.kind(), UnsupportedFontKind::FamilyNotFound);
            assert_eq!(err.family(), Some("Definitely Not Installed"));
            assert!(err.to_string().contains("Definitely Not Installed"));
        }
        other => panic!("expected an unsupported font, got {other:?}"),
    }
}

#[test]
fn fonts_configuration_is_checked_before_lookup() {
    let mut library = FontLibrary::empty();
    let config = DrawerConfig::new().font_size(-1.0);
    let err = GlyphRunBuilder::from_config(&config, &mut library).unwrap_err();
    match err {
        Error::Config(err) => assert_eq!(err.kind(), ConfigErrorKind::InvalidFontSize(-1.0)),
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn fonts_registering_garbage_adds_nothing() {
    let mut library = FontLibrary::empty();
    assert_eq!(library.register_fonts(vec![0xAB; 128]), 0);
    assert!(!library.can_resolve("monospace"));
}

/// Uses whatever monospace font the machine provides; passes vacuously without one.
#[test]
fn fonts_system_monospace_draws_consistently() {
    let mut library = FontLibrary::new();
    let Ok(typeface) = library.resolve("monospace") else {
        return;
    };
    assert!(typeface.mapped_count() > 0);
    assert!(typeface.outline_data().is_some());

    let env = TestEnv::new(test_name!(), Some(Arc::new(typeface)));
    let mut fast = env.fast();
    let mut naive = env.naive();
    for sample in runkit_dev::samples() {
        let a = env.draw(&mut fast, &sample.text, TEXT_ORIGIN);
        let b = env.draw(&mut naive, &sample.text, TEXT_ORIGIN);
        if let (Some(a), Some(b)) = (a, b) {
            assert_same_glyphs(&a, &b, sample.name);
        }
    }
}
