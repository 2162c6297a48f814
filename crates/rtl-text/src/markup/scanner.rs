use crate::buffer::CharBuffer;

use super::{TagKind, TagSpan, TagSpanProvider};

const OPEN: u32 = '<' as u32;
const CLOSE: u32 = '>' as u32;
const SLASH: u32 = '/' as u32;
const EQUALS: u32 = '=' as u32;
const SPACE: u32 = ' ' as u32;

/// Default tag span provider.
///
/// Accepts `<name>`, `<name=value>`, `<name attr=value>`, `</name>` and
/// the `<#rrggbb>` colour shorthand. A tag must not start with a space
/// and must close before the next `<`.
#[derive(Debug, Clone, Copy)]
pub struct TagScanner {
    require_known: bool,
}

impl Default for TagScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TagScanner {
    /// Scanner that only accepts names from the tag registry.
    pub fn new() -> Self {
        Self {
            require_known: true,
        }
    }

    /// Scanner that accepts any well-formed tag name.
    pub fn permissive() -> Self {
        Self {
            require_known: false,
        }
    }

    /// Validate the tag opening at `open` and return the index of its `>`.
    fn validate(&self, buffer: &dyn CharBuffer, open: usize) -> Option<usize> {
        let len = buffer.len();
        let mut i = open + 1;
        if i >= len || buffer.get(i) == SPACE {
            return None;
        }
        let closing = buffer.get(i) == SLASH;
        if closing {
            i += 1;
        }

        let name_start = i;
        let mut name = String::new();
        while i < len {
            let ch = buffer.get(i);
            let Some(c) = char::from_u32(ch) else {
                return None;
            };
            let valid = c.is_ascii_alphanumeric()
                || c == '-'
                || c == '_'
                || (c == '#' && i == name_start);
            if !valid {
                break;
            }
            name.push(c.to_ascii_lowercase());
            i += 1;
        }
        if name.is_empty() || i >= len {
            return None;
        }
        if self.require_known && TagKind::from_name(&name).is_none() {
            return None;
        }

        let ch = buffer.get(i);
        if closing {
            return (ch == CLOSE).then_some(i);
        }
        if ch != CLOSE && ch != EQUALS && ch != SPACE {
            return None;
        }
        while i < len {
            match buffer.get(i) {
                CLOSE => return Some(i),
                OPEN => return None,
                _ => i += 1,
            }
        }
        None
    }
}

impl TagSpanProvider for TagScanner {
    fn find_tags(&self, buffer: &dyn CharBuffer) -> Vec<TagSpan> {
        let mut spans = Vec::new();
        let mut i = 0;
        while i < buffer.len() {
            if buffer.get(i) == OPEN {
                if let Some(end) = self.validate(buffer, i) {
                    spans.push(TagSpan::new(i, end));
                    i = end + 1;
                    continue;
                }
            }
            i += 1;
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TextBuffer;

    fn spans(scanner: TagScanner, text: &str) -> Vec<(usize, usize)> {
        let buffer = TextBuffer::from(text);
        scanner
            .find_tags(&buffer)
            .into_iter()
            .map(|s| (s.start, s.end))
            .collect()
    }

    #[test]
    fn finds_known_tags_in_order() {
        assert_eq!(
            spans(TagScanner::new(), "<b>ab</b> <color=red>x</color>"),
            vec![(0, 2), (5, 8), (10, 20), (22, 29)]
        );
    }

    #[test]
    fn accepts_colour_shorthand_and_attributes() {
        assert_eq!(spans(TagScanner::new(), "<#ff0000>x"), vec![(0, 8)]);
        assert_eq!(spans(TagScanner::new(), "<font=\"Arial\" size=2>"), vec![(0, 20)]);
    }

    #[test]
    fn rejects_malformed_candidates() {
        assert!(spans(TagScanner::new(), "< b>").is_empty());
        assert!(spans(TagScanner::new(), "<b").is_empty());
        assert!(spans(TagScanner::new(), "a < b > c").is_empty());
        assert!(spans(TagScanner::new(), "</b x>").is_empty());
        assert_eq!(spans(TagScanner::new(), "<size=<b>"), vec![(6, 8)]);
    }

    #[test]
    fn unknown_names_need_permissive_scanner() {
        assert!(spans(TagScanner::new(), "<blink>").is_empty());
        assert_eq!(spans(TagScanner::permissive(), "<blink>"), vec![(0, 6)]);
    }
}
