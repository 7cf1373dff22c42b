//! Immutable UTF-16 textual sequences with code-point-aware operations.
//!
//! This crate provides [`TextSeq`], an immutable ordered sequence of UTF-16
//! code units, together with the operations a language runtime's string
//! engine exposes on its textual type: code-point iteration and lookup,
//! positioned substring tests, Unicode normalization, repetition,
//! capability-object pattern operations, legacy HTML markup wrappers,
//! code-point construction, and raw template reconstruction.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────────┐     ┌──────────────┐
//! │   types.rs   │────▶│ code_point.rs  │────▶│  search.rs   │
//! │  (TextSeq,   │     │ (CodePoint,    │     │ (contains,   │
//! │  TextError)  │     │  CodePoints)   │     │  prefix/suffix)│
//! └──────────────┘     └────────────────┘     └──────────────┘
//!        │                     │                      │
//!        ▼                     ▼                      ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  normalize.rs   pattern.rs   markup.rs   template.rs    │
//! │  (UAX #15)      (Matcher/    (tag        (TemplateLiteral│
//! │                  Replacer/    wrappers)   + raw)         │
//! │                  Searcher/                               │
//! │                  Splitter)                               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! | Module       | Responsibility                                      |
//! |--------------|-----------------------------------------------------|
//! | `types`      | The sequence type itself, errors, repetition        |
//! | `code_point` | Surrogate-aware decoding, iteration, construction   |
//! | `search`     | Positioned containment, prefix, and suffix tests    |
//! | `normalize`  | Unicode normalization forms                         |
//! | `pattern`    | Capability traits the pattern operations dispatch on|
//! | `markup`     | Legacy HTML element wrappers                        |
//! | `template`   | Template call sites and raw reconstruction          |
//!
//! # Usage
//!
//! ```
//! use utf16seq::TextSeq;
//!
//! let text = TextSeq::from("clef: 𝄞");
//! assert_eq!(text.code_points().count(), 7);
//! assert!(text.contains(&TextSeq::from("𝄞")));
//!
//! let rebuilt: TextSeq = text.code_points().collect();
//! assert_eq!(rebuilt, text);
//! ```

mod code_point;
mod markup;
mod normalize;
mod pattern;
mod search;
mod template;
mod types;

// Re-exports for public API
pub use code_point::{CodePoint, CodePoints, MAX_CODE_POINT};
pub use markup::FontSize;
pub use normalize::Form;
pub use pattern::{Match, Matcher, Replacement, Replacer, Searcher, Splitter};
pub use template::TemplateLiteral;
pub use types::{TextError, TextSeq};
