// Copyright 2026-present The utf16seq Authors
// SPDX-License-Identifier: Apache-2.0

//! Unicode normalization forms.
//!
//! The four UAX #15 forms, delegated to the `unicode-normalization` crate.
//! Normalization is defined over scalar values, so a sequence is decoded
//! lossily first: any lone surrogate becomes U+FFFD in the result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::types::{TextError, TextSeq};

/// A normalization form selector. The default form is NFC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Form {
    /// Canonical composition.
    #[default]
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility composition.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

impl Form {
    pub fn as_str(self) -> &'static str {
        match self {
            Form::Nfc => "NFC",
            Form::Nfd => "NFD",
            Form::Nfkc => "NFKC",
            Form::Nfkd => "NFKD",
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Form {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, TextError> {
        match s {
            "NFC" => Ok(Form::Nfc),
            "NFD" => Ok(Form::Nfd),
            "NFKC" => Ok(Form::Nfkc),
            "NFKD" => Ok(Form::Nfkd),
            other => Err(TextError::UnknownNormalizationForm {
                form: other.to_string(),
            }),
        }
    }
}

impl TextSeq {
    /// A new sequence normalized into `form` per Unicode Standard Annex #15.
    pub fn normalize(&self, form: Form) -> TextSeq {
        let decoded: String = char::decode_utf16(self.as_units().iter().copied())
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
        let normalized: String = match form {
            Form::Nfc => decoded.nfc().collect(),
            Form::Nfd => decoded.nfd().collect(),
            Form::Nfkc => decoded.nfkc().collect(),
            Form::Nfkd => decoded.nfkd().collect(),
        };
        TextSeq::from(normalized.as_str())
    }
}
