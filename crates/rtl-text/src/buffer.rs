//! Growable code-unit storage.
//!
//! Every stage works on `u32` code units addressed by index. Text built
//! from `&str` holds Unicode scalar values; text built from UTF-16 keeps
//! surrogate units as they are, so later stages can recognise them by
//! range and keep them together.

use core::fmt;

/// Indexed, growable code-unit storage.
///
/// `get` and `set` panic when `index` is out of bounds, like slice
/// indexing.
pub trait CharBuffer {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> u32;

    fn set(&mut self, index: usize, ch: u32);

    fn push(&mut self, ch: u32);

    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CharBuffer for Vec<u32> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> u32 {
        self[index]
    }

    fn set(&mut self, index: usize, ch: u32) {
        self[index] = ch;
    }

    fn push(&mut self, ch: u32) {
        Vec::push(self, ch);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

/// Owned code-unit buffer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    units: Vec<u32>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: Vec::with_capacity(capacity),
        }
    }

    /// Build a buffer from UTF-16 code units without decoding surrogate
    /// pairs.
    pub fn from_utf16(units: &[u16]) -> Self {
        Self {
            units: units.iter().map(|&u| u32::from(u)).collect(),
        }
    }

    /// Replace the contents with the scalar values of `text`, keeping the
    /// allocation.
    pub fn set_text(&mut self, text: &str) {
        self.units.clear();
        self.units.extend(text.chars().map(u32::from));
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.units
    }

    /// Decode the buffer into a `String`.
    ///
    /// A high surrogate immediately followed by a low surrogate is
    /// recombined. Lone surrogates and values outside the Unicode range
    /// become U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        let mut out = String::with_capacity(self.units.len());
        let mut i = 0;
        while i < self.units.len() {
            let unit = self.units[i];
            if (0xD800..=0xDBFF).contains(&unit) {
                if let Some(&low) = self.units.as_slice().get(i + 1) {
                    if (0xDC00..=0xDFFF).contains(&low) {
                        let scalar = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                        out.push(char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER));
                        i += 2;
                        continue;
                    }
                }
            }
            out.push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
            i += 1;
        }
        out
    }
}

impl CharBuffer for TextBuffer {
    fn len(&self) -> usize {
        self.units.len()
    }

    fn get(&self, index: usize) -> u32 {
        self.units[index]
    }

    fn set(&mut self, index: usize, ch: u32) {
        self.units[index] = ch;
    }

    fn push(&mut self, ch: u32) {
        self.units.push(ch);
    }

    fn clear(&mut self) {
        self.units.clear();
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        let mut buffer = Self::with_capacity(text.len());
        buffer.set_text(text);
        buffer
    }
}

impl From<Vec<u32>> for TextBuffer {
    fn from(units: Vec<u32>) -> Self {
        Self { units }
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextBuffer({:?})", self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_round_trip_keeps_scalars() {
        let buffer = TextBuffer::from("abc سلام");
        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer.get(4), 'س' as u32);
        assert_eq!(buffer.to_string_lossy(), "abc سلام");
    }

    #[test]
    fn utf16_keeps_surrogates_raw() {
        let units: Vec<u16> = "a😀".encode_utf16().collect();
        let buffer = TextBuffer::from_utf16(&units);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.get(1), 0xD83D);
        assert_eq!(buffer.get(2), 0xDE00);
        assert_eq!(buffer.to_string_lossy(), "a😀");
    }

    #[test]
    fn lone_surrogate_becomes_replacement() {
        let buffer = TextBuffer::from(vec![0xD800, 'x' as u32]);
        assert_eq!(buffer.to_string_lossy(), "\u{FFFD}x");

        let trailing = TextBuffer::from(vec!['a' as u32, 0xD83D]);
        assert_eq!(trailing.to_string_lossy(), "a\u{FFFD}");
    }

    #[test]
    fn set_text_reuses_buffer() {
        let mut buffer = TextBuffer::from("long text here");
        buffer.set_text("ab");
        assert_eq!(buffer.as_slice(), &['a' as u32, 'b' as u32]);
        buffer.set(0, 'z' as u32);
        assert_eq!(buffer.to_string_lossy(), "zb");
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
