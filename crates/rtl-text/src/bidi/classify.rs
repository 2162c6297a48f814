//! Directionality classification.
//!
//! Every position gets a class in four passes: tag spans, right-to-left
//! script, left-to-right letters, then everything else (punctuation,
//! symbols, digits, spaces) from its neighbours. Paired delimiters are
//! resolved together from what they enclose.

use tracing::debug;

use crate::buffer::CharBuffer;
use crate::markup::TagSpan;
use crate::unicode::{SPACE, is_ltr_letter, is_rtl};

use super::context::{Classification, ContextType, Direction, ResolvedType};
use super::pairs::{MirroredPairMap, SymmetricPairSet};

/// Positions the partner searches of one `classify` call may visit.
pub const DEFAULT_PAIR_SEARCH_LIMIT: usize = 1 << 20;

/// Classify `buffer` with the default pair-search limit.
pub fn classify<B: CharBuffer + ?Sized>(buffer: &B, tags: &[TagSpan]) -> Classification {
    Classifier::default().classify(buffer, tags)
}

/// Direction classifier.
///
/// Stateless apart from the cost ceiling on paired-delimiter searches,
/// which bounds nested-bracket input to a fixed amount of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    pair_search_limit: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            pair_search_limit: DEFAULT_PAIR_SEARCH_LIMIT,
        }
    }

    /// Classifier whose partner searches stop after visiting `limit`
    /// positions in total. Delimiters left unpaired fall back to the
    /// neighbour rules.
    pub fn with_pair_search_limit(limit: usize) -> Self {
        Self {
            pair_search_limit: limit,
        }
    }

    pub fn pair_search_limit(&self) -> usize {
        self.pair_search_limit
    }

    /// Assign a class to every position of `buffer`.
    ///
    /// `tags` must be ascending and non-overlapping; positions inside them
    /// stay `Tag`.
    pub fn classify<B: CharBuffer + ?Sized>(&self, buffer: &B, tags: &[TagSpan]) -> Classification {
        let len = buffer.len();
        let mut types = vec![ContextType::Default; len];

        for span in tags {
            if span.start >= len || span.end < span.start {
                continue;
            }
            for slot in &mut types[span.start..=span.end.min(len - 1)] {
                *slot = ContextType::Tag;
            }
        }

        let mut has_rtl = false;
        for (i, slot) in types.iter_mut().enumerate() {
            if *slot == ContextType::Default && is_rtl(buffer.get(i)) {
                *slot = ContextType::RightToLeft;
                has_rtl = true;
            }
        }

        let mut has_ltr = false;
        for (i, slot) in types.iter_mut().enumerate() {
            if *slot == ContextType::Default && is_ltr_letter(buffer.get(i)) {
                *slot = ContextType::LeftToRight;
                has_ltr = true;
            }
        }

        if !has_rtl && !has_ltr {
            return Classification {
                types: types
                    .into_iter()
                    .map(|t| match t {
                        ContextType::Tag => ResolvedType::Tag,
                        _ => ResolvedType::LeftToRight,
                    })
                    .collect(),
                dominant: Direction::LeftToRight,
            };
        }

        let mut search = PairSearch::new(self.pair_search_limit);
        for i in 0..len {
            if types[i] != ContextType::Default {
                continue;
            }
            let ch = buffer.get(i);

            let (mut previous, previous_space) = scan_previous(buffer, &types, i);
            let (mut behind, behind_space) = scan_behind(buffer, &types, i);
            if previous == ContextType::Default {
                previous = behind;
            } else if behind == ContextType::Default {
                behind = previous;
            }

            if let Some(partner) = MirroredPairMap::partner(ch) {
                if partner > ch {
                    if let Some(j) = search.find_partner(buffer, &types, i, ch, partner) {
                        resolve_pair(&mut types, &mut search, i, j, previous, behind);
                    }
                }
            } else if SymmetricPairSet::contains(ch) {
                if let Some(j) = search.find_partner(buffer, &types, i, ch, ch) {
                    resolve_pair(&mut types, &mut search, i, j, previous, behind);
                }
            }

            if types[i] != ContextType::Default {
                continue;
            }
            types[i] = resolve_neutral(ch, previous, behind, previous_space, behind_space).into();
        }

        let dominant = if has_rtl {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        };
        let types = types
            .into_iter()
            .map(|t| match t {
                ContextType::Tag => ResolvedType::Tag,
                ContextType::LeftToRight => ResolvedType::LeftToRight,
                ContextType::RightToLeft => ResolvedType::RightToLeft,
                ContextType::Default => {
                    debug_assert!(false, "position left unresolved");
                    dominant.into()
                }
            })
            .collect();

        Classification { types, dominant }
    }
}

/// Nearest resolved class before `i`, and whether a space was passed on
/// the way (the resolved neighbour itself included).
fn scan_previous<B: CharBuffer + ?Sized>(
    buffer: &B,
    types: &[ContextType],
    i: usize,
) -> (ContextType, bool) {
    let mut crossed_space = false;
    for j in (0..i).rev() {
        if buffer.get(j) == SPACE {
            crossed_space = true;
        }
        if types[j].is_resolved_direction() {
            return (types[j], crossed_space);
        }
    }
    (ContextType::Default, crossed_space)
}

/// Nearest resolved class after `i`, see [`scan_previous`].
fn scan_behind<B: CharBuffer + ?Sized>(
    buffer: &B,
    types: &[ContextType],
    i: usize,
) -> (ContextType, bool) {
    let mut crossed_space = false;
    for j in i + 1..types.len() {
        if buffer.get(j) == SPACE {
            crossed_space = true;
        }
        if types[j].is_resolved_direction() {
            return (types[j], crossed_space);
        }
    }
    (ContextType::Default, crossed_space)
}

/// Neighbour rules for punctuation, symbols, digits and spaces.
fn resolve_neutral(
    ch: u32,
    previous: ContextType,
    behind: ContextType,
    previous_space: bool,
    behind_space: bool,
) -> Direction {
    use ContextType::{LeftToRight, RightToLeft};

    match (previous, behind) {
        (LeftToRight, LeftToRight) => return Direction::LeftToRight,
        (RightToLeft, RightToLeft) => return Direction::RightToLeft,
        _ => {}
    }
    if ch == SPACE {
        return Direction::RightToLeft;
    }
    let adopted = match (previous_space, behind_space) {
        (false, true) => previous,
        (true, false) => behind,
        _ => RightToLeft,
    };
    match adopted {
        LeftToRight => Direction::LeftToRight,
        _ => Direction::RightToLeft,
    }
}

/// Resolve the delimiters at `open` and `close` from what they enclose.
///
/// Right-to-left content makes both right-to-left. Purely left-to-right
/// content makes both left-to-right when the opening delimiter's own
/// neighbours are left-to-right too. With no letters inside, the first
/// letter after the pair decides the same way, and no letter at all
/// makes both right-to-left. Anything else leaves them to the neighbour
/// rules.
fn resolve_pair(
    types: &mut [ContextType],
    search: &mut PairSearch,
    open: usize,
    close: usize,
    previous: ContextType,
    behind: ContextType,
) {
    let mut has_rtl = false;
    let mut has_ltr = false;
    for t in &types[open + 1..close] {
        match t {
            ContextType::RightToLeft => has_rtl = true,
            ContextType::LeftToRight => has_ltr = true,
            _ => {}
        }
    }
    search.charge(close - open);

    let outer_ltr = previous == ContextType::LeftToRight && behind == ContextType::LeftToRight;
    let resolved = if has_rtl {
        Some(ContextType::RightToLeft)
    } else if has_ltr {
        outer_ltr.then_some(ContextType::LeftToRight)
    } else {
        match types[close + 1..]
            .iter()
            .copied()
            .find(|t| t.is_resolved_direction())
        {
            None => Some(ContextType::RightToLeft),
            Some(ContextType::LeftToRight) if outer_ltr => Some(ContextType::LeftToRight),
            Some(_) => None,
        }
    };

    if let Some(t) = resolved {
        types[open] = t;
        types[close] = t;
    }
}

/// Shared budget for partner searches.
struct PairSearch {
    remaining: usize,
    exhausted: bool,
}

impl PairSearch {
    fn new(limit: usize) -> Self {
        Self {
            remaining: limit,
            exhausted: false,
        }
    }

    fn charge(&mut self, steps: usize) {
        self.remaining = self.remaining.saturating_sub(steps);
    }

    /// Find the delimiter closing the one at `i`, skipping nested
    /// `open`/`close` pairs and tag positions.
    ///
    /// For symmetric delimiters `open == close` and the next occurrence
    /// closes.
    fn find_partner<B: CharBuffer + ?Sized>(
        &mut self,
        buffer: &B,
        types: &[ContextType],
        i: usize,
        open: u32,
        close: u32,
    ) -> Option<usize> {
        let mut depth = 0usize;
        for j in i + 1..buffer.len() {
            if self.remaining == 0 {
                if !self.exhausted {
                    debug!(index = i, "pair search limit reached, skipping delimiter pairing");
                    self.exhausted = true;
                }
                return None;
            }
            self.remaining -= 1;

            if types[j] == ContextType::Tag {
                continue;
            }
            let ch = buffer.get(j);
            if ch == close {
                if depth == 0 {
                    return Some(j);
                }
                depth -= 1;
            } else if ch == open {
                depth += 1;
            }
        }
        None
    }
}
