//! Paired punctuation.
//!
//! Mirrored pairs have distinct opening and closing glyphs and swap them
//! inside right-to-left flow. Symmetric pairs use one glyph for both ends
//! and are only used to disambiguate direction.

/// Opening and closing glyph of every mirrored pair.
const MIRRORED_PAIRS: &[(char, char)] = &[
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('<', '>'),
    ('«', '»'),
    ('「', '」'),
    ('『', '』'),
    ('〚', '〛'),
    ('‘', '’'),
    ('“', '”'),
    ('⦗', '⦘'),
    ('⟨', '⟩'),
    ('⦃', '⦄'),
    ('⟦', '⟧'),
    ('《', '》'),
    ('❨', '❩'),
    ('⸨', '⸩'),
    ('⌈', '⌉'),
    ('⌊', '⌋'),
    ('｢', '｣'),
    ('❲', '❳'),
];

const SYMMETRIC_PAIRS: &[char] = &['"', '\''];

/// Bijection between the two glyphs of each mirrored pair.
pub struct MirroredPairMap;

impl MirroredPairMap {
    /// Return the other glyph of the pair `ch` belongs to.
    pub fn partner(ch: u32) -> Option<u32> {
        MIRRORED_PAIRS.iter().find_map(|&(open, close)| {
            if u32::from(open) == ch {
                Some(u32::from(close))
            } else if u32::from(close) == ch {
                Some(u32::from(open))
            } else {
                None
            }
        })
    }

    pub fn contains(ch: u32) -> bool {
        Self::partner(ch).is_some()
    }

    /// Return the glyph to draw for `ch` in right-to-left flow.
    ///
    /// Characters without a mirror are returned unchanged.
    pub fn mirror(ch: u32) -> u32 {
        Self::partner(ch).unwrap_or(ch)
    }
}

/// Delimiters drawn with the same glyph at both ends.
pub struct SymmetricPairSet;

impl SymmetricPairSet {
    pub fn contains(ch: u32) -> bool {
        SYMMETRIC_PAIRS.iter().any(|&c| u32::from(c) == ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(c: char) -> u32 {
        c as u32
    }

    #[test]
    fn mirrors_parentheses() {
        assert_eq!(MirroredPairMap::mirror(u('(')), u(')'));
        assert_eq!(MirroredPairMap::mirror(u(')')), u('('));
    }

    #[test]
    fn mirrors_quotes_and_cjk_brackets() {
        assert_eq!(MirroredPairMap::mirror(u('«')), u('»'));
        assert_eq!(MirroredPairMap::mirror(u('”')), u('“'));
        assert_eq!(MirroredPairMap::mirror(u('』')), u('『'));
        assert_eq!(MirroredPairMap::mirror(u('｢')), u('｣'));
    }

    #[test]
    fn map_is_a_bijection() {
        for &(open, close) in MIRRORED_PAIRS {
            assert!(u(open) < u(close), "{open:?} should sort before {close:?}");
            let partner = MirroredPairMap::partner(u(open)).unwrap();
            assert_eq!(MirroredPairMap::partner(partner), Some(u(open)));
        }
    }

    #[test]
    fn leaves_others_unchanged() {
        assert_eq!(MirroredPairMap::mirror(u('a')), u('a'));
        assert!(!MirroredPairMap::contains(u('"')));
        let alef = u('ا');
        assert_eq!(MirroredPairMap::mirror(alef), alef);
    }

    #[test]
    fn straight_quotes_are_symmetric() {
        assert!(SymmetricPairSet::contains(u('"')));
        assert!(SymmetricPairSet::contains(u('\'')));
        assert!(!SymmetricPairSet::contains(u('«')));
    }
}
