// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer configuration.

use alloc::string::String;

use crate::error::{ConfigError, ConfigErrorKind};

/// Resolution of a standard-DPI surface; one device-independent pixel per pixel.
pub const STANDARD_DPI: f32 = 96.0;

/// Default number of glyph slots reserved by a run buffer.
pub const DEFAULT_CAPACITY: usize = 1024;

/// How a drawer produces the [`GlyphRun`](crate::GlyphRun) it hands to the sink.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RunStrategy {
    /// Keep one run for the lifetime of the drawer and update it in place.
    #[default]
    InPlace,
    /// Construct a fresh run on every call.
    PerCall,
}

/// Options for constructing a drawer.
///
/// Values are checked by [`validate`](Self::validate), which every fallible
/// drawer constructor calls.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Font family name, resolved through a [`FontLibrary`](crate::FontLibrary).
    ///
    /// The default value is `"monospace"`.
    pub family: String,

    /// Font size in device-independent pixels per em.
    ///
    /// The default value is 16.
    pub font_size: f64,

    /// Resolution of the target surface in dots per inch.
    ///
    /// The default value is [`STANDARD_DPI`].
    pub dpi: f32,

    /// Number of glyph slots reserved up front by the run buffer.
    ///
    /// The default value is [`DEFAULT_CAPACITY`].
    pub initial_capacity: usize,

    /// How the run descriptor is produced on each call.
    ///
    /// The default value is [`RunStrategy::InPlace`].
    pub strategy: RunStrategy,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            family: "monospace".into(),
            font_size: 16.0,
            dpi: STANDARD_DPI,
            initial_capacity: DEFAULT_CAPACITY,
            strategy: RunStrategy::InPlace,
        }
    }
}

impl DrawerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family name.
    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    /// Set the font size in device-independent pixels per em.
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the resolution of the target surface.
    pub fn dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Set the number of glyph slots reserved up front.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set how the run descriptor is produced.
    pub fn strategy(mut self, strategy: RunStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Device pixels per device-independent pixel.
    pub fn pixels_per_dip(&self) -> f32 {
        self.dpi / STANDARD_DPI
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ConfigError::new(ConfigErrorKind::InvalidFontSize(
                self.font_size,
            )));
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(ConfigError::new(ConfigErrorKind::InvalidDpi(self.dpi)));
        }
        if self.initial_capacity == 0 {
            return Err(ConfigError::new(ConfigErrorKind::InvalidCapacity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DrawerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.pixels_per_dip(), 1.0);
        assert_eq!(config.initial_capacity, 1024);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let cases = [
            (
                DrawerConfig::new().font_size(0.0),
                ConfigErrorKind::InvalidFontSize(0.0),
            ),
            (
                DrawerConfig::new().font_size(-3.0),
                ConfigErrorKind::InvalidFontSize(-3.0),
            ),
            (DrawerConfig::new().dpi(0.0), ConfigErrorKind::InvalidDpi(0.0)),
            (
                DrawerConfig::new().initial_capacity(0),
                ConfigErrorKind::InvalidCapacity,
            ),
        ];
        for (config, expected) in cases {
            assert_eq!(
                config.validate().map_err(|e| e.kind()),
                Err(expected),
                "{config:?}"
            );
        }
        let nan = DrawerConfig::new().font_size(f64::NAN).validate();
        assert!(nan.is_err(), "NaN font size must be rejected");
    }

    #[test]
    fn pixels_per_dip_follows_dpi() {
        assert_eq!(DrawerConfig::new().dpi(192.0).pixels_per_dip(), 2.0);
    }
}
