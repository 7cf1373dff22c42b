//! Raw template reconstruction.

use std::fmt;

use crate::common::seq;
use utf16seq::{TemplateLiteral, TextSeq};

#[test]
fn stringifies_mixed_substitution_values() {
    let template = TemplateLiteral::from_segments(&["", " is ", " (", ")"]).unwrap();
    let out = TextSeq::raw(&template, &[&"pi", &3.5, &false]);
    assert_eq!(out.to_string(), "pi is 3.5 (false)");
}

#[test]
fn custom_display_types_participate() {
    struct Version(u8, u8);
    impl fmt::Display for Version {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "v{}.{}", self.0, self.1)
        }
    }
    let template = TemplateLiteral::from_segments(&["release ", ""]).unwrap();
    let out = TextSeq::raw(&template, &[&Version(2, 1)]);
    assert_eq!(out.to_string(), "release v2.1");
}

#[test]
fn cooked_and_raw_segments_are_kept_separately() {
    let template = TemplateLiteral::new(
        vec![seq("tab\there"), seq("")],
        vec![seq("tab\\there"), seq("")],
    )
    .unwrap();
    assert_eq!(template.cooked()[0], seq("tab\there"));
    assert_eq!(template.raw_segments()[0], seq("tab\\there"));
    // Reconstruction reads only the raw side.
    assert_eq!(TextSeq::raw(&template, &[&""]).to_string(), "tab\\there");
}

#[test]
fn no_substitutions_concatenates_segments() {
    let template = TemplateLiteral::from_segments(&["a", "b", "c"]).unwrap();
    assert_eq!(TextSeq::raw(&template, &[]).to_string(), "abc");
}
