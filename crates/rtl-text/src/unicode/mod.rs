//! Unicode utilities for rtl-text.
//!
//! Code-point predicates used by the classifier and the reorder engine.
//! All of them take raw `u32` code units so lone surrogates can be
//! inspected without decoding.

pub mod properties;

pub use properties::{
    DIACRITIC_PLACEHOLDER, SPACE, ZERO_WIDTH_NON_JOINER, is_dropped, is_english_letter,
    is_letter, is_ltr_letter, is_number, is_punctuation, is_rtl, is_surrogate, is_symbol,
};
