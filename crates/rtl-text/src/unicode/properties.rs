use core::cmp::Ordering;

use unicode_bidi::{BidiClass, bidi_class};

/// Placeholder left behind where a diacritic was stripped upstream.
pub const DIACRITIC_PLACEHOLDER: u32 = 0xFFFF;

/// ZERO WIDTH NON-JOINER, consumed by shaping and never rendered.
pub const ZERO_WIDTH_NON_JOINER: u32 = 0x200C;

pub const SPACE: u32 = 0x20;

/// Arabic-script blocks treated as right-to-left.
const RTL_RANGES: &[(u32, u32)] = &[
    (0x0600, 0x06FF),   // Arabic
    (0x0750, 0x077F),   // Arabic Supplement
    (0x08A0, 0x08FF),   // Arabic Extended-A
    (0xFB50, 0xFDFF),   // Arabic Presentation Forms-A
    (0xFE70, 0xFEFF),   // Arabic Presentation Forms-B
    (0x1EE00, 0x1EEFF), // Arabic Mathematical Alphabetic Symbols
];

/// Non-ASCII punctuation of the Basic Multilingual Plane (general
/// categories Pc, Pd, Ps, Pe, Pi, Pf, Po as of Unicode 14).
const PUNCTUATION_RANGES: &[(u32, u32)] = &[
    (0x00A1, 0x00A1),
    (0x00A7, 0x00A7),
    (0x00AB, 0x00AB),
    (0x00B6, 0x00B7),
    (0x00BB, 0x00BB),
    (0x00BF, 0x00BF),
    (0x037E, 0x037E),
    (0x0387, 0x0387),
    (0x055A, 0x055F),
    (0x0589, 0x058A),
    (0x05BE, 0x05BE),
    (0x05C0, 0x05C0),
    (0x05C3, 0x05C3),
    (0x05C6, 0x05C6),
    (0x05F3, 0x05F4),
    (0x0609, 0x060A),
    (0x060C, 0x060D),
    (0x061B, 0x061B),
    (0x061D, 0x061F),
    (0x066A, 0x066D),
    (0x06D4, 0x06D4),
    (0x0700, 0x070D),
    (0x07F7, 0x07F9),
    (0x0830, 0x083E),
    (0x085E, 0x085E),
    (0x0964, 0x0965),
    (0x0970, 0x0970),
    (0x09FD, 0x09FD),
    (0x0A76, 0x0A76),
    (0x0AF0, 0x0AF0),
    (0x0C77, 0x0C77),
    (0x0C84, 0x0C84),
    (0x0DF4, 0x0DF4),
    (0x0E4F, 0x0E4F),
    (0x0E5A, 0x0E5B),
    (0x0F04, 0x0F12),
    (0x0F14, 0x0F14),
    (0x0F3A, 0x0F3D),
    (0x0F85, 0x0F85),
    (0x0FD0, 0x0FD4),
    (0x0FD9, 0x0FDA),
    (0x104A, 0x104F),
    (0x10FB, 0x10FB),
    (0x1360, 0x1368),
    (0x1400, 0x1400),
    (0x166E, 0x166E),
    (0x169B, 0x169C),
    (0x16EB, 0x16ED),
    (0x1735, 0x1736),
    (0x17D4, 0x17D6),
    (0x17D8, 0x17DA),
    (0x1800, 0x180A),
    (0x1944, 0x1945),
    (0x1A1E, 0x1A1F),
    (0x1AA0, 0x1AA6),
    (0x1AA8, 0x1AAD),
    (0x1B5A, 0x1B60),
    (0x1B7D, 0x1B7E),
    (0x1BFC, 0x1BFF),
    (0x1C3B, 0x1C3F),
    (0x1C7E, 0x1C7F),
    (0x1CC0, 0x1CC7),
    (0x1CD3, 0x1CD3),
    (0x2010, 0x2027),
    (0x2030, 0x2043),
    (0x2045, 0x2051),
    (0x2053, 0x205E),
    (0x207D, 0x207E),
    (0x208D, 0x208E),
    (0x2308, 0x230B),
    (0x2329, 0x232A),
    (0x2768, 0x2775),
    (0x27C5, 0x27C6),
    (0x27E6, 0x27EF),
    (0x2983, 0x2998),
    (0x29D8, 0x29DB),
    (0x29FC, 0x29FD),
    (0x2CF9, 0x2CFC),
    (0x2CFE, 0x2CFF),
    (0x2D70, 0x2D70),
    (0x2E00, 0x2E2E),
    (0x2E30, 0x2E4F),
    (0x2E52, 0x2E5D),
    (0x3001, 0x3003),
    (0x3008, 0x3011),
    (0x3014, 0x301F),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x30A0, 0x30A0),
    (0x30FB, 0x30FB),
    (0xA4FE, 0xA4FF),
    (0xA60D, 0xA60F),
    (0xA673, 0xA673),
    (0xA67E, 0xA67E),
    (0xA6F2, 0xA6F7),
    (0xA874, 0xA877),
    (0xA8CE, 0xA8CF),
    (0xA8F8, 0xA8FA),
    (0xA8FC, 0xA8FC),
    (0xA92E, 0xA92F),
    (0xA95F, 0xA95F),
    (0xA9C1, 0xA9CD),
    (0xA9DE, 0xA9DF),
    (0xAA5C, 0xAA5F),
    (0xAADE, 0xAADF),
    (0xAAF0, 0xAAF1),
    (0xABEB, 0xABEB),
    (0xFD3E, 0xFD3F),
    (0xFE10, 0xFE19),
    (0xFE30, 0xFE52),
    (0xFE54, 0xFE61),
    (0xFE63, 0xFE63),
    (0xFE68, 0xFE68),
    (0xFE6A, 0xFE6B),
    (0xFF01, 0xFF03),
    (0xFF05, 0xFF0A),
    (0xFF0C, 0xFF0F),
    (0xFF1A, 0xFF1B),
    (0xFF1F, 0xFF20),
    (0xFF3B, 0xFF3D),
    (0xFF3F, 0xFF3F),
    (0xFF5B, 0xFF5B),
    (0xFF5D, 0xFF5D),
    (0xFF5F, 0xFF65),
];

fn in_ranges(ch: u32, ranges: &[(u32, u32)]) -> bool {
    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < ch {
                Ordering::Less
            } else if lo > ch {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

fn as_char(ch: u32) -> Option<char> {
    char::from_u32(ch)
}

/// Returns `true` for code points of the Arabic-script blocks and for the
/// diacritic placeholder.
pub fn is_rtl(ch: u32) -> bool {
    ch == DIACRITIC_PLACEHOLDER || in_ranges(ch, RTL_RANGES)
}

pub fn is_letter(ch: u32) -> bool {
    as_char(ch).is_some_and(char::is_alphabetic)
}

/// A letter outside the right-to-left blocks.
pub fn is_ltr_letter(ch: u32) -> bool {
    is_letter(ch) && !is_rtl(ch)
}

pub fn is_english_letter(ch: u32) -> bool {
    as_char(ch).is_some_and(|c| c.is_ascii_alphabetic())
}

pub fn is_surrogate(ch: u32) -> bool {
    (0xD800..=0xDFFF).contains(&ch)
}

/// Returns `true` if `ch` counts as a digit whose reading order must be
/// kept.
///
/// ASCII digits always count. The native digit set counts too: Extended
/// Arabic-Indic (U+06F0..U+06F9) when `farsi`, Arabic-Indic
/// (U+0660..U+0669) otherwise. With `preserve_numbers` both native sets
/// count.
pub fn is_number(ch: u32, preserve_numbers: bool, farsi: bool) -> bool {
    let ascii = (0x30..=0x39).contains(&ch);
    let arabic_indic = (0x0660..=0x0669).contains(&ch);
    let extended = (0x06F0..=0x06F9).contains(&ch);
    if preserve_numbers {
        return ascii || arabic_indic || extended;
    }
    ascii || if farsi { extended } else { arabic_indic }
}

pub fn is_punctuation(ch: u32) -> bool {
    if ch < 0x80 {
        return as_char(ch).is_some_and(|c| c.is_ascii_punctuation() && !is_ascii_symbol(c));
    }
    in_ranges(ch, PUNCTUATION_RANGES)
}

/// Math, currency, modifier and other symbols (general category S*).
///
/// Outside ASCII this relies on the bidi class: a neutral or terminator
/// that is neither punctuation, letter nor number is a symbol.
pub fn is_symbol(ch: u32) -> bool {
    let Some(c) = as_char(ch) else {
        return false;
    };
    if c.is_ascii() {
        return is_ascii_symbol(c);
    }
    if c.is_alphanumeric() || in_ranges(ch, PUNCTUATION_RANGES) {
        return false;
    }
    matches!(bidi_class(c), BidiClass::ON | BidiClass::ET | BidiClass::ES)
}

fn is_ascii_symbol(c: char) -> bool {
    matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
}

/// Code points removed from the visual output.
pub fn is_dropped(ch: u32) -> bool {
    ch == DIACRITIC_PLACEHOLDER || ch == ZERO_WIDTH_NON_JOINER
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(c: char) -> u32 {
        c as u32
    }

    #[test]
    fn arabic_blocks_are_rtl() {
        assert!(is_rtl(u('س')));
        assert!(is_rtl(0xFEFB));
        assert!(is_rtl(0x1EE00));
        assert!(is_rtl(DIACRITIC_PLACEHOLDER));
        assert!(!is_rtl(u('a')));
        // Hebrew is outside the supported blocks.
        assert!(!is_rtl(u('א')));
    }

    #[test]
    fn letters_split_by_direction() {
        assert!(is_ltr_letter(u('a')));
        assert!(is_ltr_letter(u('é')));
        assert!(!is_ltr_letter(u('س')));
        assert!(is_letter(u('س')));
        assert!(!is_letter(u('1')));
        assert!(is_english_letter(u('Z')));
        assert!(!is_english_letter(u('é')));
    }

    #[test]
    fn number_rule_follows_flags() {
        assert!(is_number(u('7'), false, true));
        assert!(is_number(u('۷'), false, true));
        assert!(!is_number(u('٧'), false, true));
        assert!(is_number(u('٧'), false, false));
        assert!(!is_number(u('۷'), false, false));
        assert!(is_number(u('٧'), true, true));
        assert!(is_number(u('۷'), true, false));
    }

    #[test]
    fn punctuation_and_symbols_are_disjoint_in_ascii() {
        for c in ['.', ',', '!', '?', '(', ')', '"', '\'', '-', '#', '%', '&', '*', '/', '@'] {
            assert!(is_punctuation(u(c)), "{c:?} is punctuation");
            assert!(!is_symbol(u(c)), "{c:?} is not a symbol");
        }
        for c in ['$', '+', '<', '=', '>', '^', '|', '~'] {
            assert!(is_symbol(u(c)), "{c:?} is a symbol");
            assert!(!is_punctuation(u(c)), "{c:?} is not punctuation");
        }
    }

    #[test]
    fn non_ascii_classes() {
        assert!(is_punctuation(u('،')));
        assert!(is_punctuation(u('«')));
        assert!(is_punctuation(u('」')));
        assert!(is_symbol(u('€')));
        assert!(is_symbol(u('→')));
        assert!(is_symbol(u('°')));
        assert!(!is_symbol(u('«')));
        assert!(!is_symbol(u('¼')));
        assert!(!is_symbol(u('a')));
    }

    #[test]
    fn punctuation_covers_every_script_block() {
        for ch in 0x0700..=0x070D {
            assert!(is_punctuation(ch), "U+{ch:04X}");
        }
        for ch in [0x07F7, 0x07F9, 0x0830, 0x083E, 0x0F04, 0x2E5D, 0xFF65] {
            assert!(is_punctuation(ch), "U+{ch:04X}");
        }
        // Unassigned, then a Syriac letter.
        assert!(!is_punctuation(0x070E));
        assert!(!is_punctuation(0x0710));
    }

    #[test]
    fn punctuation_ranges_are_sorted_and_disjoint() {
        for pair in PUNCTUATION_RANGES.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0, "{pair:x?}");
        }
        for pair in RTL_RANGES.windows(2) {
            assert!(pair[0].1 < pair[1].0, "{pair:x?}");
        }
    }

    #[test]
    fn surrogates_and_sentinels() {
        assert!(is_surrogate(0xD83D));
        assert!(is_surrogate(0xDE00));
        assert!(!is_surrogate(0xE000));
        assert!(is_dropped(ZERO_WIDTH_NON_JOINER));
        assert!(is_dropped(DIACRITIC_PLACEHOLDER));
        assert!(!is_dropped(SPACE));
    }
}
