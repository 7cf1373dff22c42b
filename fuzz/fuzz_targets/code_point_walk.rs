// Copyright 2026-present The utf16seq Authors
// SPDX-License-Identifier: Apache-2.0

//! Code-point decoding under adversarial unit soup.
//!
//! Sequences built from raw units can contain any arrangement of lone
//! leads, lone trails, and truncated pairs. Every decode path must treat
//! that as data, never as a reason to panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use utf16seq::TextSeq;

fuzz_target!(|units: Vec<u16>| {
    let text = TextSeq::from_units(units.clone());

    // Walking by reported widths must land exactly on the end.
    let mut pos = 0;
    let mut values = Vec::new();
    while let Some(point) = text.code_point_at(pos) {
        assert!(point.value() < 0x110000);
        values.push(point.value());
        pos += point.len_units();
    }
    assert_eq!(pos, units.len());

    // Iteration must agree with the walk and round-trip the sequence.
    let elements: Vec<TextSeq> = text.code_points().collect();
    assert_eq!(elements.len(), values.len());
    let rebuilt: TextSeq = elements.into_iter().collect();
    assert_eq!(rebuilt, text);

    // Re-encoding the walked values reproduces the units, pairs and
    // lone surrogates alike.
    let reencoded = TextSeq::from_code_points(values).unwrap();
    assert_eq!(reencoded, text);

    // Display must cope with anything (lossily).
    let _ = text.to_string();
});
