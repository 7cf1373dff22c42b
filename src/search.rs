// Copyright 2026-present The utf16seq Authors
// SPDX-License-Identifier: Apache-2.0

//! Positioned containment, prefix, and suffix tests.
//!
//! All positions are code-unit indices. Positions past the end clamp to
//! the sequence length rather than failing, so a containment test from a
//! huge position is simply false (or true for the empty needle, which
//! occurs everywhere).

use crate::types::TextSeq;

impl TextSeq {
    /// True when `needle` occurs at any position. Equivalent to
    /// [`contains_from`](Self::contains_from) with position 0.
    pub fn contains(&self, needle: &TextSeq) -> bool {
        self.contains_from(needle, 0)
    }

    /// True when `needle` occurs at one or more positions greater than or
    /// equal to `position`.
    pub fn contains_from(&self, needle: &TextSeq, position: usize) -> bool {
        self.index_of(needle, position).is_some()
    }

    /// The first position at or after `from` where `needle` occurs.
    ///
    /// The empty needle occurs at every position, including the end.
    pub fn index_of(&self, needle: &TextSeq, from: usize) -> Option<usize> {
        let start = from.min(self.len());
        if needle.is_empty() {
            return Some(start);
        }
        let hay = &self.as_units()[start..];
        hay.windows(needle.len())
            .position(|window| window == needle.as_units())
            .map(|offset| start + offset)
    }

    /// True when the units starting at position 0 equal `needle`.
    pub fn starts_with(&self, needle: &TextSeq) -> bool {
        self.starts_with_at(needle, 0)
    }

    /// True when the units starting at `position` equal `needle`.
    pub fn starts_with_at(&self, needle: &TextSeq, position: usize) -> bool {
        let start = position.min(self.len());
        self.as_units()[start..].starts_with(needle.as_units())
    }

    /// True when the text ending at the sequence length equals `needle`.
    pub fn ends_with(&self, needle: &TextSeq) -> bool {
        self.ends_with_at(needle, self.len())
    }

    /// True when the text ending at `end_position` equals `needle`.
    pub fn ends_with_at(&self, needle: &TextSeq, end_position: usize) -> bool {
        let end = end_position.min(self.len());
        self.as_units()[..end].ends_with(needle.as_units())
    }
}
