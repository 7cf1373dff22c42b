//! Capability dispatch: the pattern operations delegate, they never match.

use crate::common::seq;
use utf16seq::{Match, Matcher, Replacement, Replacer, Searcher, Splitter, TextSeq};

/// A word matcher over ASCII spaces: returns every space-delimited word.
/// Exists to prove the operations accept arbitrary capability objects,
/// not just literal sequences.
struct WordMatcher;

impl Matcher for WordMatcher {
    fn find_matches(&self, haystack: &TextSeq) -> Option<Vec<Match>> {
        let space = seq(" ");
        let words: Vec<Match> = haystack
            .split_with(&space, None)
            .into_iter()
            .scan(0usize, |pos, word| {
                let index = *pos;
                *pos += word.len() + 1;
                Some(Match { index, text: word })
            })
            .filter(|m| !m.text.is_empty())
            .collect();
        if words.is_empty() {
            None
        } else {
            Some(words)
        }
    }
}

/// A replacer that replaces every occurrence instead of the first.
struct GlobalReplacer(TextSeq);

impl Replacer for GlobalReplacer {
    fn replace_in(&self, haystack: &TextSeq, replacement: &dyn Replacement) -> TextSeq {
        let mut current = haystack.clone();
        while let Some(index) = current.index_of(&self.0, 0) {
            let matched = Match {
                index,
                text: self.0.clone(),
            };
            let produced = replacement.produce(&matched);
            let units = current.as_units();
            let mut next = Vec::new();
            next.extend_from_slice(&units[..index]);
            next.extend_from_slice(produced.as_units());
            next.extend_from_slice(&units[index + self.0.len()..]);
            let candidate = TextSeq::from_units(next);
            if candidate == current {
                break;
            }
            current = candidate;
        }
        current
    }
}

/// A splitter that splits into fixed-width chunks of code units.
struct ChunkSplitter(usize);

impl Splitter for ChunkSplitter {
    fn split_seq(&self, haystack: &TextSeq, limit: Option<usize>) -> Vec<TextSeq> {
        let cap = limit.unwrap_or(usize::MAX);
        haystack
            .as_units()
            .chunks(self.0)
            .take(cap)
            .map(|chunk| TextSeq::from_units(chunk.to_vec()))
            .collect()
    }
}

struct MiddleSearcher;

impl Searcher for MiddleSearcher {
    fn search_in(&self, haystack: &TextSeq) -> Option<usize> {
        Some(haystack.len() / 2)
    }
}

#[test]
fn match_with_custom_matcher() {
    let matches = seq("one two three").match_with(&WordMatcher).unwrap();
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].text, seq("one"));
    assert_eq!(matches[1].index, 4);
    assert_eq!(matches[2].text, seq("three"));
}

#[test]
fn replace_with_custom_replacer_touches_all_occurrences() {
    let out = seq("aaa").replace_with(&GlobalReplacer(seq("a")), &seq("b"));
    assert_eq!(out, seq("bbb"));
}

#[test]
fn search_with_custom_searcher() {
    assert_eq!(seq("abcdef").search_with(&MiddleSearcher), Some(3));
}

#[test]
fn split_with_custom_splitter_honors_limit() {
    let pieces = seq("abcdef").split_with(&ChunkSplitter(2), Some(2));
    assert_eq!(pieces, vec![seq("ab"), seq("cd")]);
}

#[test]
fn literal_coercion_matches_the_same_text() {
    // A plain sequence is itself a capability object for all four
    // operations; the receiver just dispatches.
    let hay = seq("pattern in a haystack pattern");
    let pat = seq("pattern");
    assert_eq!(hay.match_with(&pat).unwrap()[0].index, 0);
    assert_eq!(hay.search_with(&pat), Some(0));
    assert_eq!(hay.split_with(&pat, None).len(), 3);
    assert_eq!(
        hay.replace_with(&pat, &seq("needle")).to_string(),
        "needle in a haystack pattern"
    );
}
