//! rtl-text: right-to-left text fixing for logical-order layout engines.
//!
//! The layout engine this feeds only lays text out left-to-right in
//! storage order. This crate turns a logical-order string (Arabic-script
//! text mixed with Latin words, numbers and markup tags) into the visual
//! order such an engine can render as-is.
//!
//! - `buffer`: growable code-unit storage shared by every stage
//! - `unicode`: code-point predicates and sentinel constants
//! - `markup`: tag registry, tag spans and the default span scanner
//! - `bidi`: the directionality classifier and the reorder engine
//! - `fixer`: the pipeline tying the pieces together

pub mod bidi;
pub mod buffer;
pub mod error;
pub mod fixer;
pub mod markup;
pub mod unicode;

pub use bidi::{
    Classification, Classifier, ContextType, Direction, ResolvedType, ReorderEngine, classify,
};
pub use buffer::{CharBuffer, TextBuffer};
pub use error::FixDefect;
pub use fixer::{FixOptions, RtlFixer};
pub use markup::{ClosingForm, TagKind, TagScanner, TagSpan, TagSpanProvider};
