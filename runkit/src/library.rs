// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font lookup by family name.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use fontique::{Blob, Collection, CollectionOptions, FamilyInfo, GenericFamily, SourceCache};

use crate::error::{UnsupportedFontError, UnsupportedFontKind};
use crate::typeface::Typeface;

/// A font database that resolves family names to [`Typeface`]s.
///
/// This wraps a Fontique [`Collection`] and [`SourceCache`]. Besides concrete
/// family names it understands the generic names `serif`, `sans-serif`,
/// `monospace`, `cursive`, `fantasy` and `system-ui`.
pub struct FontLibrary {
    collection: Collection,
    source_cache: SourceCache,
}

impl Debug for FontLibrary {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FontLibrary").finish_non_exhaustive()
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FontLibrary {
    /// Creates a library that includes the fonts installed on the system.
    pub fn new() -> Self {
        Self::with_options(true)
    }

    /// Creates a library with no fonts until some are registered.
    pub fn empty() -> Self {
        Self::with_options(false)
    }

    fn with_options(system_fonts: bool) -> Self {
        Self {
            collection: Collection::new(CollectionOptions {
                shared: false,
                system_fonts,
            }),
            source_cache: SourceCache::default(),
        }
    }

    /// Registers every font in a font file or collection.
    ///
    /// Returns the number of families the data contributed to.
    pub fn register_fonts(&mut self, data: Vec<u8>) -> usize {
        let families = self
            .collection
            .register_fonts(Blob::new(Arc::new(data)), None);
        log::debug!("registered fonts for {} families", families.len());
        families.len()
    }

    /// Loads the default face of `family`.
    pub fn resolve(&mut self, family: &str) -> Result<Typeface, UnsupportedFontError> {
        self.load(family).map_err(|err| {
            let err = err.with_family(family);
            log::warn!("{err}");
            err
        })
    }

    /// Whether `family` names a family the library knows about.
    ///
    /// This doesn't load the font, so [`resolve`](Self::resolve) may still
    /// fail for it.
    pub fn can_resolve(&mut self, family: &str) -> bool {
        self.family_info(family).is_some()
    }

    fn load(&mut self, family: &str) -> Result<Typeface, UnsupportedFontError> {
        let info = self
            .family_info(family)
            .ok_or(UnsupportedFontError::new(UnsupportedFontKind::FamilyNotFound))?;
        let font = info
            .default_font()
            .ok_or(UnsupportedFontError::new(UnsupportedFontKind::FamilyNotFound))?;
        let data = font
            .load(Some(&mut self.source_cache))
            .ok_or(UnsupportedFontError::new(UnsupportedFontKind::LoadFailed))?;
        log::trace!(
            "loaded {family:?} face {} ({} bytes)",
            font.index(),
            data.as_ref().len()
        );
        Typeface::from_font_data(data, font.index())
    }

    fn family_info(&mut self, family: &str) -> Option<FamilyInfo> {
        if let Some(info) = self.collection.family_by_name(family) {
            return Some(info);
        }
        let generic = generic_family(family)?;
        let id = self.collection.generic_families(generic).next()?;
        self.collection.family(id)
    }
}

fn generic_family(name: &str) -> Option<GenericFamily> {
    Some(match name {
        "serif" => GenericFamily::Serif,
        "sans-serif" => GenericFamily::SansSerif,
        "monospace" => GenericFamily::Monospace,
        "cursive" => GenericFamily::Cursive,
        "fantasy" => GenericFamily::Fantasy,
        "system-ui" => GenericFamily::SystemUi,
        _ => return None,
    })
}
