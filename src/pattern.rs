// Copyright 2026-present The utf16seq Authors
// SPDX-License-Identifier: Apache-2.0

//! Capability traits the pattern operations dispatch on.
//!
//! The sequence type implements no pattern matching of its own. Its
//! `match_with` / `replace_with` / `search_with` / `split_with` operations
//! delegate entirely to a capability object the caller supplies: one trait
//! per recognized operation, one required method per trait. A regex engine,
//! a glob matcher, or anything else can participate by implementing the
//! relevant trait.
//!
//! Plain text coerces to a pattern: `TextSeq` itself implements all four
//! capabilities with literal-substring semantics (first occurrence for
//! match, replace, and search; every occurrence for split).

use serde::{Deserialize, Serialize};

use crate::types::TextSeq;

/// One successful match: where it was found and what was matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Code-unit position of the match within the haystack.
    pub index: usize,
    /// The matched substring.
    pub text: TextSeq,
}

/// A capability that can be matched against a sequence.
pub trait Matcher {
    /// All results of matching against `haystack`, or `None` when there
    /// is no match at all.
    fn find_matches(&self, haystack: &TextSeq) -> Option<Vec<Match>>;
}

/// A capability that can search for and replace matches within a sequence.
pub trait Replacer {
    /// `haystack` with matches replaced by what `replacement` produces.
    fn replace_in(&self, haystack: &TextSeq, replacement: &dyn Replacement) -> TextSeq;
}

/// A capability that can locate its first match within a sequence.
pub trait Searcher {
    /// Code-unit position of the first match, or `None`.
    fn search_in(&self, haystack: &TextSeq) -> Option<usize>;
}

/// A capability that can split a sequence into substrings.
pub trait Splitter {
    /// The pieces of `haystack`, at most `limit` of them when given.
    fn split_seq(&self, haystack: &TextSeq, limit: Option<usize>) -> Vec<TextSeq>;
}

/// What to substitute for a match: either a fixed sequence or a function
/// of the match. Covers both replacement shapes the contract allows.
pub trait Replacement {
    fn produce(&self, matched: &Match) -> TextSeq;
}

impl Replacement for TextSeq {
    fn produce(&self, _matched: &Match) -> TextSeq {
        self.clone()
    }
}

impl<F> Replacement for F
where
    F: Fn(&Match) -> TextSeq,
{
    fn produce(&self, matched: &Match) -> TextSeq {
        self(matched)
    }
}

impl TextSeq {
    /// Match this sequence against a capability object. Pure delegation.
    pub fn match_with<M: Matcher + ?Sized>(&self, matcher: &M) -> Option<Vec<Match>> {
        matcher.find_matches(self)
    }

    /// Replace within this sequence using a capability object. Pure
    /// delegation; the replacer decides what counts as a match and how
    /// many to replace.
    pub fn replace_with<R: Replacer + ?Sized>(
        &self,
        replacer: &R,
        replacement: &dyn Replacement,
    ) -> TextSeq {
        replacer.replace_in(self, replacement)
    }

    /// Locate the first match of a capability object. Pure delegation.
    pub fn search_with<S: Searcher + ?Sized>(&self, searcher: &S) -> Option<usize> {
        searcher.search_in(self)
    }

    /// Split this sequence using a capability object. Pure delegation.
    pub fn split_with<S: Splitter + ?Sized>(
        &self,
        splitter: &S,
        limit: Option<usize>,
    ) -> Vec<TextSeq> {
        splitter.split_seq(self, limit)
    }
}

// ============================================================================
// LITERAL COERCION: a plain sequence used as a pattern
// ============================================================================

impl Matcher for TextSeq {
    fn find_matches(&self, haystack: &TextSeq) -> Option<Vec<Match>> {
        haystack.index_of(self, 0).map(|index| {
            vec![Match {
                index,
                text: self.clone(),
            }]
        })
    }
}

impl Replacer for TextSeq {
    /// Replaces the first occurrence only; the haystack comes back
    /// unchanged when the pattern is absent.
    fn replace_in(&self, haystack: &TextSeq, replacement: &dyn Replacement) -> TextSeq {
        match haystack.index_of(self, 0) {
            None => haystack.clone(),
            Some(index) => {
                let matched = Match {
                    index,
                    text: self.clone(),
                };
                let produced = replacement.produce(&matched);
                let units = haystack.as_units();
                let mut out = Vec::with_capacity(
                    units.len() - self.len() + produced.len(),
                );
                out.extend_from_slice(&units[..index]);
                out.extend_from_slice(produced.as_units());
                out.extend_from_slice(&units[index + self.len()..]);
                TextSeq::from_units(out)
            }
        }
    }
}

impl Searcher for TextSeq {
    fn search_in(&self, haystack: &TextSeq) -> Option<usize> {
        haystack.index_of(self, 0)
    }
}

impl Splitter for TextSeq {
    /// Splits on every occurrence. The empty separator splits between
    /// code units. A separator that never occurs yields the whole
    /// haystack as the single piece. `limit` truncates the result.
    fn split_seq(&self, haystack: &TextSeq, limit: Option<usize>) -> Vec<TextSeq> {
        let cap = limit.unwrap_or(usize::MAX);
        if cap == 0 {
            return Vec::new();
        }
        let units = haystack.as_units();
        if self.is_empty() {
            return units
                .iter()
                .take(cap)
                .map(|&unit| TextSeq::from_units(vec![unit]))
                .collect();
        }
        let mut pieces = Vec::new();
        let mut start = 0;
        while let Some(index) = haystack.index_of(self, start) {
            pieces.push(TextSeq::from_units(units[start..index].to_vec()));
            if pieces.len() == cap {
                return pieces;
            }
            start = index + self.len();
        }
        pieces.push(TextSeq::from_units(units[start..].to_vec()));
        pieces.truncate(cap);
        pieces
    }
}
