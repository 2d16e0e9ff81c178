// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while constructing drawers.
//!
//! Drawing itself never fails: characters the font can't map are replaced by
//! [sentinel metrics](crate::GlyphMetrics::SENTINEL) instead.

use alloc::string::String;
use core::fmt;

/// A font could not be resolved to glyph outlines.
///
/// Carries a non-exhaustive [`UnsupportedFontKind`] plus the requested family
/// name, when the font was looked up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFontError {
    kind: UnsupportedFontKind,
    family: Option<String>,
}

impl UnsupportedFontError {
    pub(crate) fn new(kind: UnsupportedFontKind) -> Self {
        Self { kind, family: None }
    }

    /// Attaches the requested family name.
    #[must_use]
    pub(crate) fn with_family(mut self, family: &str) -> Self {
        self.family = Some(family.into());
        self
    }

    /// The machine-readable category for this error.
    pub fn kind(&self) -> UnsupportedFontKind {
        self.kind
    }

    /// The family name that was requested, if the font was looked up by name.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }
}

impl fmt::Display for UnsupportedFontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            UnsupportedFontKind::FamilyNotFound => "no such font family",
            UnsupportedFontKind::LoadFailed => "font data could not be loaded",
            UnsupportedFontKind::ParseFailed => "font data could not be parsed",
            UnsupportedFontKind::NoOutlines => "font has no glyph outlines",
            UnsupportedFontKind::NoCharacterMap => "font has no usable character map",
        };
        match &self.family {
            Some(family) => write!(f, "unsupported font {family:?}: {reason}"),
            None => write!(f, "unsupported font: {reason}"),
        }
    }
}

impl core::error::Error for UnsupportedFontError {}

/// The non-exhaustive category of an [`UnsupportedFontError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnsupportedFontKind {
    /// No family with the requested name exists in the collection.
    FamilyNotFound,

    /// The family exists but its font data could not be loaded.
    LoadFailed,

    /// The bytes are not a font (or not a font at the given collection index).
    ParseFailed,

    /// The font parses but carries neither `glyf` nor CFF outlines.
    NoOutlines,

    /// The font maps no characters to glyphs.
    NoCharacterMap,
}

/// A drawer configuration value is out of range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigError {
    kind: ConfigErrorKind,
}

impl ConfigError {
    pub(crate) fn new(kind: ConfigErrorKind) -> Self {
        Self { kind }
    }

    /// The offending setting.
    pub fn kind(&self) -> ConfigErrorKind {
        self.kind
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConfigErrorKind::InvalidFontSize(size) => {
                write!(f, "font size must be positive and finite, got {size}")
            }
            ConfigErrorKind::InvalidDpi(dpi) => {
                write!(f, "resolution must be positive and finite, got {dpi}")
            }
            ConfigErrorKind::InvalidCapacity => {
                write!(f, "initial buffer capacity must be at least 1")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// The non-exhaustive category of a [`ConfigError`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ConfigErrorKind {
    /// The font size is zero, negative, or not finite.
    InvalidFontSize(f64),

    /// The device resolution is zero, negative, or not finite.
    InvalidDpi(f32),

    /// The initial buffer capacity is zero.
    InvalidCapacity,
}

/// Any error returned while constructing a drawer.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The configured font could not be used.
    UnsupportedFont(UnsupportedFontError),

    /// The configuration was rejected.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFont(err) => err.fmt(f),
            Self::Config(err) => err.fmt(f),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::UnsupportedFont(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<UnsupportedFontError> for Error {
    fn from(err: UnsupportedFontError) -> Self {
        Self::UnsupportedFont(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
