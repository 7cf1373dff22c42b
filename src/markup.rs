// Copyright 2026-present The utf16seq Authors
// SPDX-License-Identifier: Apache-2.0

//! Legacy HTML element wrappers.
//!
//! Each operation wraps the receiver in a fixed tag template, substituting
//! attribute values verbatim. The contract specifies no validation and no
//! escaping, so a quote inside an attribute value passes straight through;
//! callers that feed these into real markup must sanitize first.

use serde::{Deserialize, Serialize};

use crate::types::TextSeq;

/// A `<font>` size: either a numeric step or a keyword like `"+2"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    Steps(i32),
    Keyword(TextSeq),
}

impl From<i32> for FontSize {
    fn from(steps: i32) -> Self {
        FontSize::Steps(steps)
    }
}

impl From<&str> for FontSize {
    fn from(keyword: &str) -> Self {
        FontSize::Keyword(TextSeq::from(keyword))
    }
}

impl From<TextSeq> for FontSize {
    fn from(keyword: TextSeq) -> Self {
        FontSize::Keyword(keyword)
    }
}

impl FontSize {
    fn into_seq(self) -> TextSeq {
        match self {
            FontSize::Steps(steps) => TextSeq::from(steps.to_string()),
            FontSize::Keyword(keyword) => keyword,
        }
    }
}

fn push_ascii(out: &mut Vec<u16>, s: &str) {
    out.extend(s.encode_utf16());
}

impl TextSeq {
    /// `<tag>` or `<tag attr="value">` around `self`. Attribute values are
    /// substituted unescaped, per the contract.
    fn tagged(&self, tag: &str, attr: Option<(&str, &TextSeq)>) -> TextSeq {
        let mut out = Vec::with_capacity(self.len() + tag.len() * 2 + 16);
        push_ascii(&mut out, "<");
        push_ascii(&mut out, tag);
        if let Some((name, value)) = attr {
            push_ascii(&mut out, " ");
            push_ascii(&mut out, name);
            push_ascii(&mut out, "=\"");
            out.extend_from_slice(value.as_units());
            push_ascii(&mut out, "\"");
        }
        push_ascii(&mut out, ">");
        out.extend_from_slice(self.as_units());
        push_ascii(&mut out, "</");
        push_ascii(&mut out, tag);
        push_ascii(&mut out, ">");
        TextSeq::from_units(out)
    }

    /// An `<a>` element with its `name` attribute set.
    pub fn anchor(&self, name: &TextSeq) -> TextSeq {
        self.tagged("a", Some(("name", name)))
    }

    /// A `<big>` element.
    pub fn big(&self) -> TextSeq {
        self.tagged("big", None)
    }

    /// A `<blink>` element.
    pub fn blink(&self) -> TextSeq {
        self.tagged("blink", None)
    }

    /// A `<b>` element.
    pub fn bold(&self) -> TextSeq {
        self.tagged("b", None)
    }

    /// A `<tt>` element.
    pub fn fixed(&self) -> TextSeq {
        self.tagged("tt", None)
    }

    /// A `<font>` element with its `color` attribute set.
    pub fn fontcolor(&self, color: &TextSeq) -> TextSeq {
        self.tagged("font", Some(("color", color)))
    }

    /// A `<font>` element with its `size` attribute set, numeric or keyword.
    pub fn fontsize<S: Into<FontSize>>(&self, size: S) -> TextSeq {
        self.tagged("font", Some(("size", &size.into().into_seq())))
    }

    /// An `<i>` element.
    pub fn italics(&self) -> TextSeq {
        self.tagged("i", None)
    }

    /// An `<a>` element with its `href` attribute set.
    pub fn link(&self, url: &TextSeq) -> TextSeq {
        self.tagged("a", Some(("href", url)))
    }

    /// A `<small>` element.
    pub fn small(&self) -> TextSeq {
        self.tagged("small", None)
    }

    /// A `<strike>` element.
    pub fn strike(&self) -> TextSeq {
        self.tagged("strike", None)
    }

    /// A `<sub>` element.
    pub fn sub(&self) -> TextSeq {
        self.tagged("sub", None)
    }

    /// A `<sup>` element.
    pub fn sup(&self) -> TextSeq {
        self.tagged("sup", None)
    }
}
