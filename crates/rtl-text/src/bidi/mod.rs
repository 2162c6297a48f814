//! Directionality classification and visual reordering.
//!
//! This is a deliberately simplified bidi heuristic for short UI strings
//! with embedded markup, not an implementation of UAX-9:
//! - `classify` gives every position a direction, resolving punctuation,
//!   spaces and paired delimiters from their neighbours
//! - `ReorderEngine` walks the classified text backwards and emits it in
//!   visual order, keeping left-to-right runs and tags intact

pub mod classify;
pub mod context;
pub mod pairs;
pub mod reorder;

pub use classify::{Classifier, classify};
pub use context::{Classification, ContextType, Direction, ResolvedType};
pub use pairs::{MirroredPairMap, SymmetricPairSet};
pub use reorder::ReorderEngine;
