//! Recoverable defects reported by a fix operation.
//!
//! A fix never fails. Each defect is logged when it happens and kept on
//! the engine until the next call so callers can inspect it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixDefect {
    /// A tag run with no `<` inside it, or with a space right after `<`.
    /// Its characters are processed as ordinary text.
    #[error("malformed tag at {start}..={end}, reprocessed as text")]
    MalformedTag { start: usize, end: usize },

    /// A tag whose name is not in the registry. It passes through
    /// literally and no closing tag is synthesized for it.
    #[error("unknown tag type `{name}` at {start}..={end}")]
    UnknownTagType {
        name: String,
        start: usize,
        end: usize,
    },

    /// A position reached the ordinary branches without a direction of its
    /// own; the dominant direction was used.
    #[error("no direction at index {index}, used the dominant direction")]
    ResidualDirection { index: usize },
}
