// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable glyph storage.

use alloc::vec;
use alloc::vec::Vec;

/// Parallel glyph index and advance arrays reused across draw calls.
///
/// Both arrays are always allocated to the full [capacity](Self::capacity);
/// the logical length is tracked separately and only published through
/// [`commit`](Self::commit), once every slot below it has been written.
/// Capacity never shrinks.
///
/// Views returned by [`glyph_ids`](Self::glyph_ids) and
/// [`advances`](Self::advances) borrow the buffer, so it can't be refilled or
/// grown while one is alive.
#[derive(Clone, Debug)]
pub struct RunBuffer {
    glyph_ids: Vec<u16>,
    advances: Vec<f64>,
    len: usize,
}

impl RunBuffer {
    /// Creates a buffer with `capacity` zeroed slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            glyph_ids: vec![0; capacity],
            advances: vec![0.0; capacity],
            len: 0,
        }
    }

    /// Number of slots that can be written without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.glyph_ids.len()
    }

    /// The committed length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the committed length is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Makes room for at least `len` slots.
    ///
    /// Grows to the larger of twice the current capacity and `len`, keeping
    /// everything already written.
    pub fn ensure_capacity(&mut self, len: usize) {
        let capacity = self.capacity();
        if len <= capacity {
            return;
        }
        let new_capacity = (capacity * 2).max(len);
        log::debug!("growing run buffer from {capacity} to {new_capacity} glyphs");
        self.glyph_ids.resize(new_capacity, 0);
        self.advances.resize(new_capacity, 0.0);
    }

    /// Makes room for one slot per character of `text`.
    ///
    /// Characters are only counted when the UTF-8 length, which bounds the
    /// character count, exceeds the capacity.
    pub fn ensure_capacity_for(&mut self, text: &str) {
        if text.len() > self.capacity() {
            self.ensure_capacity(text.chars().count());
        }
    }

    /// Writes slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the capacity; call
    /// [`ensure_capacity`](Self::ensure_capacity) first.
    #[inline]
    pub fn set(&mut self, index: usize, glyph_id: u16, advance: f64) {
        self.glyph_ids[index] = glyph_id;
        self.advances[index] = advance;
    }

    /// Publishes `len` as the logical length.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the capacity.
    #[inline]
    pub fn commit(&mut self, len: usize) {
        assert!(
            len <= self.capacity(),
            "committed length {len} exceeds capacity {}",
            self.capacity()
        );
        self.len = len;
    }

    /// Glyph indices of the committed prefix.
    #[inline]
    pub fn glyph_ids(&self) -> &[u16] {
        &self.glyph_ids[..self.len]
    }

    /// Advances of the committed prefix.
    #[inline]
    pub fn advances(&self) -> &[f64] {
        &self.advances[..self.len]
    }
}
