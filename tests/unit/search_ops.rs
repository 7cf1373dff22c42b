//! Positioned containment, prefix, and suffix tests.

use crate::common::seq;

#[test]
fn containment_position_is_a_lower_bound() {
    let hay = seq("abcabc");
    let needle = seq("abc");
    assert!(hay.contains_from(&needle, 3));
    assert!(!hay.contains_from(&needle, 4));
}

#[test]
fn containment_positions_count_code_units() {
    // The crab is two units wide, so the "x" after it sits at index 3.
    let hay = seq("a🦀x");
    assert!(hay.contains_from(&seq("x"), 3));
    assert!(!hay.contains_from(&seq("a"), 1));
}

#[test]
fn prefix_and_suffix_of_whole_sequence() {
    let text = seq("whole");
    assert!(text.starts_with(&text));
    assert!(text.ends_with(&text));
}

#[test]
fn suffix_end_position_truncates_the_view() {
    let hay = seq("foobarbaz");
    assert!(hay.ends_with_at(&seq("bar"), 6));
    assert!(!hay.ends_with_at(&seq("bar"), 7));
    assert!(hay.ends_with_at(&seq(""), 0));
}

#[test]
fn prefix_start_position_shifts_the_view() {
    let hay = seq("foobar");
    assert!(hay.starts_with_at(&seq("bar"), 3));
    assert!(!hay.starts_with_at(&seq("foo"), 3));
}

#[test]
fn surrogate_halves_are_matchable_as_units() {
    // Unit-level semantics: the trail half of a pair is a findable needle.
    let hay = seq("𝄞");
    let trail = utf16seq::TextSeq::from_units(vec![0xDD1E]);
    assert!(hay.contains(&trail));
    assert!(hay.ends_with(&trail));
}
