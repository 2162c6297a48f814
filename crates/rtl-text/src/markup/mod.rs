//! Rich-text markup tags.
//!
//! Tags are opaque to direction classification. The classifier only
//! needs their spans; the reorder engine additionally needs to know
//! whether a tag opens or closes, its name, and how to close it.

pub mod registry;
pub mod scanner;

pub use registry::{ClosingForm, TagKind};
pub use scanner::TagScanner;

use crate::buffer::CharBuffer;

/// Inclusive logical index range of one validated tag, `<` to `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan {
    pub start: usize,
    pub end: usize,
}

impl TagSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "tag span start after end");
        Self { start, end }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Source of validated tag spans.
///
/// Implementations must return spans in ascending order that do not
/// overlap.
pub trait TagSpanProvider {
    fn find_tags(&self, buffer: &dyn CharBuffer) -> Vec<TagSpan>;
}

/// Parsed head of a tag: whether it closes, and its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHead {
    pub closing: bool,
    pub name: String,
}

impl TagHead {
    pub fn kind(&self) -> Option<TagKind> {
        TagKind::from_name(&self.name)
    }
}

/// Read the head of the tag starting at `open`, which must hold `<`.
///
/// The name runs up to the first `=`, space or `>` and is lowercased.
pub fn parse_head(buffer: &(impl CharBuffer + ?Sized), open: usize, end: usize) -> TagHead {
    let mut i = open + 1;
    let closing = i <= end && buffer.get(i) == u32::from('/');
    if closing {
        i += 1;
    }
    let mut name = String::new();
    while i <= end {
        let ch = buffer.get(i);
        if ch == u32::from('=') || ch == u32::from(' ') || ch == u32::from('>') {
            break;
        }
        if let Some(c) = char::from_u32(ch) {
            name.push(c.to_ascii_lowercase());
        }
        i += 1;
    }
    TagHead { closing, name }
}
