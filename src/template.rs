// Copyright 2026-present The utf16seq Authors
// SPDX-License-Identifier: Apache-2.0

//! Template call sites and raw reconstruction.
//!
//! A [`TemplateLiteral`] is the call-site object a tagged template hands
//! its tag: parallel lists of cooked (escape-processed) and raw
//! (unprocessed) literal segments. [`TextSeq::raw`] rebuilds the source
//! text from the raw segments, interleaving stringified substitution
//! values literal-segment-first and ending with the final segment.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{TextError, TextSeq};

/// A well-formed template call site: cooked and raw segment lists of equal,
/// nonzero length. Validated at construction so reconstruction never has
/// to re-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLiteral {
    cooked: Vec<TextSeq>,
    raw: Vec<TextSeq>,
}

impl TemplateLiteral {
    /// Build a call site from parallel cooked and raw segment lists.
    pub fn new(cooked: Vec<TextSeq>, raw: Vec<TextSeq>) -> Result<Self, TextError> {
        if raw.is_empty() {
            return Err(TextError::EmptyTemplate);
        }
        if cooked.len() != raw.len() {
            return Err(TextError::MismatchedTemplateSegments {
                cooked: cooked.len(),
                raw: raw.len(),
            });
        }
        Ok(TemplateLiteral { cooked, raw })
    }

    /// Convenience constructor for segments with no escapes, where the
    /// cooked and raw forms coincide.
    pub fn from_segments(segments: &[&str]) -> Result<Self, TextError> {
        let seqs: Vec<TextSeq> = segments.iter().map(|&s| TextSeq::from(s)).collect();
        TemplateLiteral::new(seqs.clone(), seqs)
    }

    /// The escape-processed literal segments.
    pub fn cooked(&self) -> &[TextSeq] {
        &self.cooked
    }

    /// The raw, unprocessed literal segments.
    pub fn raw_segments(&self) -> &[TextSeq] {
        &self.raw
    }
}

impl TextSeq {
    /// Reconstruct the raw source text of a template call site.
    ///
    /// Raw segments are interleaved with the stringified substitution
    /// values, literal-segment-first, ending with the final literal
    /// segment. Substitutions beyond the available slots are dropped;
    /// missing substitutions contribute nothing.
    pub fn raw(template: &TemplateLiteral, substitutions: &[&dyn fmt::Display]) -> TextSeq {
        let segments = template.raw_segments();
        let mut out = Vec::new();
        for (i, segment) in segments.iter().enumerate() {
            out.extend_from_slice(segment.as_units());
            if i + 1 < segments.len() {
                if let Some(value) = substitutions.get(i) {
                    out.extend(value.to_string().encode_utf16());
                }
            }
        }
        TextSeq::from_units(out)
    }
}
