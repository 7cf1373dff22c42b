// Copyright 2026-present The utf16seq Authors
// SPDX-License-Identifier: Apache-2.0

//! Surrogate-aware decoding, iteration, and construction.
//!
//! UTF-16 encodes code points at or above U+10000 as a surrogate pair: a
//! lead unit in `[0xD800, 0xDC00)` followed by a trail unit in
//! `[0xDC00, 0xE000)`. Everything in this module walks sequences one code
//! point at a time while reassembling those pairs, and reports an unpaired
//! surrogate as the lone unit it is, rather than failing.

use serde::{Deserialize, Serialize};

use crate::types::{TextError, TextSeq};

/// The largest valid code point, inclusive.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

const LEAD_START: u16 = 0xD800;
const TRAIL_START: u16 = 0xDC00;
const TRAIL_END: u16 = 0xE000;
const ASTRAL_START: u32 = 0x10000;

/// A validated Unicode code point in `[0, 0x110000)`.
///
/// Lone surrogate values are representable: they are what
/// [`TextSeq::code_point_at`] reports for an unpaired unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct CodePoint(u32);

impl CodePoint {
    /// Create a code point, rejecting values at or above 0x110000.
    #[inline]
    pub fn new(value: u32) -> Option<Self> {
        if value <= MAX_CODE_POINT {
            Some(CodePoint(value))
        } else {
            None
        }
    }

    /// The underlying scalar value.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// How many code units this point occupies when encoded: 1 in the
    /// Basic Multilingual Plane, 2 above it.
    #[inline]
    pub fn len_units(self) -> usize {
        if self.0 >= ASTRAL_START {
            2
        } else {
            1
        }
    }

    /// Append the UTF-16 encoding of this point to `out`.
    pub(crate) fn encode_into(self, out: &mut Vec<u16>) {
        if self.0 < ASTRAL_START {
            out.push(self.0 as u16);
        } else {
            let offset = self.0 - ASTRAL_START;
            out.push(LEAD_START + (offset >> 10) as u16);
            out.push(TRAIL_START + (offset & 0x3FF) as u16);
        }
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        CodePoint(c as u32)
    }
}

#[inline]
fn is_lead(unit: u16) -> bool {
    (LEAD_START..TRAIL_START).contains(&unit)
}

#[inline]
fn is_trail(unit: u16) -> bool {
    (TRAIL_START..TRAIL_END).contains(&unit)
}

fn combine(lead: u16, trail: u16) -> u32 {
    ASTRAL_START + (((lead - LEAD_START) as u32) << 10) + (trail - TRAIL_START) as u32
}

impl TextSeq {
    /// The code point whose encoding starts at `pos`.
    ///
    /// Returns `None` when there is no element at that position. When no
    /// valid surrogate pair begins at `pos` (a lone lead, a trail, or a
    /// lead at the very end), the result is the code unit at `pos` itself.
    pub fn code_point_at(&self, pos: usize) -> Option<CodePoint> {
        let lead = self.code_unit_at(pos)?;
        if is_lead(lead) {
            if let Some(trail) = self.code_unit_at(pos + 1) {
                if is_trail(trail) {
                    return Some(CodePoint(combine(lead, trail)));
                }
            }
        }
        Some(CodePoint(lead as u32))
    }

    /// Iterate the sequence one code point at a time, yielding the
    /// one-or-two-unit substring for each. Restartable: each call returns
    /// a fresh cursor over the same units.
    pub fn code_points(&self) -> CodePoints<'_> {
        CodePoints {
            units: self.as_units(),
            pos: 0,
        }
    }

    /// Build a sequence by encoding each code point in order.
    ///
    /// Zero points yield the empty sequence. Values at or above 0x110000
    /// are rejected; lone surrogate values are accepted and encoded as
    /// the single unit they name.
    pub fn from_code_points<I>(points: I) -> Result<TextSeq, TextError>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut units = Vec::new();
        for value in points {
            let point =
                CodePoint::new(value).ok_or(TextError::CodePointOutOfRange { value })?;
            point.encode_into(&mut units);
        }
        Ok(TextSeq::from_units(units))
    }
}

/// Lazy, finite, restartable cursor over a sequence's code points.
///
/// Yields one element per code point; surrogate pairs come out as a single
/// two-unit element, never split.
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    units: &'a [u16],
    pos: usize,
}

impl Iterator for CodePoints<'_> {
    type Item = TextSeq;

    fn next(&mut self) -> Option<TextSeq> {
        let lead = *self.units.get(self.pos)?;
        let width = if is_lead(lead)
            && self.units.get(self.pos + 1).copied().is_some_and(is_trail)
        {
            2
        } else {
            1
        };
        let element = TextSeq::from_units(self.units[self.pos..self.pos + width].to_vec());
        self.pos += width;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len() - self.pos;
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl std::iter::FusedIterator for CodePoints<'_> {}
