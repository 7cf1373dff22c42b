//! Code point lookup, iteration, and construction.

use crate::common::{assert_iteration_round_trips, seq};
use utf16seq::{TextError, TextSeq, MAX_CODE_POINT};

#[test]
fn code_point_at_walks_mixed_width_text() {
    // "a" (1 unit), clef (2 units), "b" (1 unit)
    let text = seq("a𝄞b");
    assert_eq!(text.len(), 4);
    assert_eq!(text.code_point_at(0).unwrap().value(), 0x61);
    assert_eq!(text.code_point_at(1).unwrap().value(), 0x1D11E);
    assert_eq!(text.code_point_at(3).unwrap().value(), 0x62);
    assert!(text.code_point_at(4).is_none());
}

#[test]
fn iteration_yields_one_element_per_code_point() {
    let text = seq("héllo 🦀 𝄞");
    assert_eq!(text.code_points().count(), 9);
    assert_iteration_round_trips(&text);
}

#[test]
fn iteration_over_unpaired_surrogates_yields_lone_units() {
    let text = TextSeq::from_units(vec![0xD800, 0x61, 0xDC00]);
    let elements: Vec<TextSeq> = text.code_points().collect();
    assert_eq!(elements.len(), 3);
    assert_eq!(elements[0].as_units(), &[0xD800]);
    assert_eq!(elements[2].as_units(), &[0xDC00]);
    assert_iteration_round_trips(&text);
}

#[test]
fn from_code_points_builds_in_order() {
    let text = TextSeq::from_code_points([0x68, 0x69, 0x1F980]).unwrap();
    assert_eq!(text.to_string(), "hi🦀");
}

#[test]
fn from_code_points_boundary_values() {
    assert!(TextSeq::from_code_points([MAX_CODE_POINT]).is_ok());
    assert_eq!(
        TextSeq::from_code_points([MAX_CODE_POINT + 1]).unwrap_err(),
        TextError::CodePointOutOfRange {
            value: MAX_CODE_POINT + 1
        }
    );
}

#[test]
fn rebuilding_from_lookups_reconstructs_the_text() {
    let original = seq("mixed 𝄞 and 🦀 planes");
    let mut points = Vec::new();
    let mut pos = 0;
    while let Some(point) = original.code_point_at(pos) {
        points.push(point.value());
        pos += point.len_units();
    }
    let rebuilt = TextSeq::from_code_points(points).unwrap();
    assert_eq!(rebuilt, original);
}
