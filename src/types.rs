// Copyright 2026-present The utf16seq Authors
// SPDX-License-Identifier: Apache-2.0

//! The sequence type itself.
//!
//! A [`TextSeq`] is an immutable boxed slice of 16-bit code units. Every
//! operation that "modifies" text produces a new sequence; nothing here
//! mutates a receiver. Equality, ordering, and hashing are lexicographic
//! over code units, which the slice derives give us for free.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - A `TextSeq` may contain lone surrogates. Construction from `&str`
//!   cannot produce them, but `from_units` and `from_code_points` can,
//!   and `code_point_at` is specified to report them as-is.
//! - `Display` is therefore lossy: unpaired units render as U+FFFD.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable, ordered sequence of UTF-16 code units.
///
/// Indexing, lengths, and positions throughout this crate are expressed in
/// code units, not code points: a character outside the Basic Multilingual
/// Plane occupies two adjacent units (a surrogate pair).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextSeq {
    units: Box<[u16]>,
}

impl TextSeq {
    /// The empty sequence.
    pub fn new() -> Self {
        TextSeq { units: Box::new([]) }
    }

    /// Build a sequence from raw code units, paired or not.
    pub fn from_units(units: Vec<u16>) -> Self {
        TextSeq {
            units: units.into_boxed_slice(),
        }
    }

    /// The number of code units (not code points).
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The underlying code units.
    #[inline]
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// The code unit at `pos`, or `None` past the end.
    #[inline]
    pub fn code_unit_at(&self, pos: usize) -> Option<u16> {
        self.units.get(pos).copied()
    }

    /// A new sequence holding `self` followed by `other`.
    pub fn concat(&self, other: &TextSeq) -> TextSeq {
        let mut units = Vec::with_capacity(self.len() + other.len());
        units.extend_from_slice(&self.units);
        units.extend_from_slice(&other.units);
        TextSeq::from_units(units)
    }

    /// `count` concatenated copies of `self`; empty when `count` is zero.
    ///
    /// The contract's nonnegativity constraint is enforced by the parameter
    /// type rather than a runtime check.
    pub fn repeat(&self, count: usize) -> TextSeq {
        TextSeq {
            units: self.units.repeat(count).into_boxed_slice(),
        }
    }
}

impl From<&str> for TextSeq {
    fn from(s: &str) -> Self {
        TextSeq {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<String> for TextSeq {
    fn from(s: String) -> Self {
        TextSeq::from(s.as_str())
    }
}

impl FromIterator<u16> for TextSeq {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        TextSeq {
            units: iter.into_iter().collect(),
        }
    }
}

/// Concatenate sequence fragments back into one sequence. This is what
/// makes `seq.code_points().collect()` reconstruct the original.
impl FromIterator<TextSeq> for TextSeq {
    fn from_iter<I: IntoIterator<Item = TextSeq>>(iter: I) -> Self {
        let mut units = Vec::new();
        for part in iter {
            units.extend_from_slice(part.as_units());
        }
        TextSeq::from_units(units)
    }
}

/// Lossy decoding: lone surrogates render as U+FFFD.
impl fmt::Display for TextSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decoded in char::decode_utf16(self.units.iter().copied()) {
            f.write_str(
                decoded
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
                    .encode_utf8(&mut [0u8; 4]),
            )?;
        }
        Ok(())
    }
}

/// Error type for contract violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A requested code point is outside `[0, 0x110000)`.
    CodePointOutOfRange { value: u32 },
    /// A normalization form selector is not one of NFC, NFD, NFKC, NFKD.
    UnknownNormalizationForm { form: String },
    /// A template call site's cooked and raw segment lists disagree in length.
    MismatchedTemplateSegments { cooked: usize, raw: usize },
    /// A template call site has no literal segments at all.
    EmptyTemplate,
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::CodePointOutOfRange { value } => {
                write!(f, "code point {:#x} >= 0x110000", value)
            }
            TextError::UnknownNormalizationForm { form } => {
                write!(f, "unknown normalization form '{}'", form)
            }
            TextError::MismatchedTemplateSegments { cooked, raw } => {
                write!(f, "cooked segments {} != raw segments {}", cooked, raw)
            }
            TextError::EmptyTemplate => {
                write!(f, "template call site has no literal segments")
            }
        }
    }
}

impl std::error::Error for TextError {}
