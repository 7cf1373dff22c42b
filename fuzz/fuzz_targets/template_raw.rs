// Copyright 2026-present The utf16seq Authors
// SPDX-License-Identifier: Apache-2.0

//! Template reconstruction under adversarial call sites.
//!
//! Mismatched segment lists must come back as errors, and any well-formed
//! call site must reconstruct without panicking regardless of how many
//! substitutions the fuzzer supplies.

#![no_main]

use std::fmt;

use libfuzzer_sys::fuzz_target;
use utf16seq::{TemplateLiteral, TextSeq};

fuzz_target!(|input: (Vec<String>, Vec<String>, Vec<String>)| {
    let (cooked, raw, substitutions) = input;
    let cooked: Vec<TextSeq> = cooked.iter().map(|s| TextSeq::from(s.as_str())).collect();
    let raw: Vec<TextSeq> = raw.iter().map(|s| TextSeq::from(s.as_str())).collect();

    let raw_len = raw.len();
    let cooked_len = cooked.len();
    match TemplateLiteral::new(cooked, raw) {
        Err(_) => {
            // Only the documented validation failures may occur.
            assert!(raw_len == 0 || cooked_len != raw_len);
        }
        Ok(template) => {
            let values: Vec<&dyn fmt::Display> =
                substitutions.iter().map(|s| s as &dyn fmt::Display).collect();
            let out = TextSeq::raw(&template, &values);

            // The output always starts with the first raw segment and
            // ends with the last one.
            let segments = template.raw_segments();
            assert!(out.starts_with(&segments[0]));
            assert!(out.ends_with(&segments[segments.len() - 1]));
        }
    }
});
