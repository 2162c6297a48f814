//! Visual reordering.
//!
//! The engine walks the classified text from the last position to the
//! first. Right-to-left characters are appended to the output as they
//! come, which already puts them in visual order. Left-to-right runs,
//! numbers and tags are held back in scan order and flushed reversed,
//! which restores their reading order inside the mirrored flow.
//!
//! All hold buffers store characters in scan order (logically last
//! first), so every flush iterates them in reverse.

use tracing::{debug, warn};

use crate::buffer::CharBuffer;
use crate::error::FixDefect;
use crate::fixer::FixOptions;
use crate::markup::{TagHead, TagSpan, parse_head};
use crate::unicode::{
    SPACE, is_dropped, is_ltr_letter, is_number, is_punctuation, is_surrogate, is_symbol,
};

use super::context::{Classification, Direction, ResolvedType};
use super::pairs::MirroredPairMap;

const TAG_OPEN: u32 = '<' as u32;

/// Initial capacity of each hold buffer.
const HOLD_CAPACITY: usize = 512;

/// A cached closing tag waiting for its opening tag, either still in the
/// end-tag buffer or already folded into the staged unit.
#[derive(Debug, Clone, Copy)]
struct PendingClose {
    /// Index into the tag spans of the opening tag it closes.
    opening: usize,
}

/// Backward-scanning reorder engine.
///
/// The hold buffers are scratch storage reused across calls, so one
/// engine serves one caller at a time; `reorder` takes `&mut self`.
#[derive(Debug)]
pub struct ReorderEngine {
    /// Pending left-to-right run.
    ltr: Vec<u32>,
    /// The tag currently being collected.
    start_tag: Vec<u32>,
    /// The latest closing tag met in left-to-right context. Logically
    /// between `ltr` and `staged`, but flushed ahead of both.
    end_tag: Vec<u32>,
    /// Tag-delimited left-to-right content. Logically follows `end_tag`.
    staged: Vec<u32>,
    pending_closes: Vec<PendingClose>,
    defects: Vec<FixDefect>,
}

impl Default for ReorderEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReorderEngine {
    pub fn new() -> Self {
        Self {
            ltr: Vec::with_capacity(HOLD_CAPACITY),
            start_tag: Vec::with_capacity(HOLD_CAPACITY),
            end_tag: Vec::with_capacity(HOLD_CAPACITY),
            staged: Vec::with_capacity(HOLD_CAPACITY),
            pending_closes: Vec::new(),
            defects: Vec::new(),
        }
    }

    /// Defects recorded by the last `reorder` call.
    pub fn defects(&self) -> &[FixDefect] {
        &self.defects
    }

    /// Write the visual order of `input` into `output`, replacing its
    /// contents.
    ///
    /// `classification` must come from classifying `input` with the same
    /// `tags`.
    pub fn reorder<B, O>(
        &mut self,
        input: &B,
        classification: &Classification,
        tags: &[TagSpan],
        options: FixOptions,
        output: &mut O,
    ) where
        B: CharBuffer + ?Sized,
        O: CharBuffer + ?Sized,
    {
        self.reset();
        output.clear();

        let len = input.len();
        let types = &classification.types;
        debug_assert_eq!(types.len(), len, "classification does not match input");
        let len = len.min(types.len());

        // Positions at or above this index belong to a malformed tag run
        // and are processed as plain text.
        let mut plain_floor = usize::MAX;
        let mut next = len;

        while next > 0 {
            let i = next - 1;
            next = i;
            let ch = input.get(i);

            if options.fix_text_tags && types[i] == ResolvedType::Tag && i < plain_floor {
                match self.collect_tag(input, types, i) {
                    Ok(open) => {
                        self.handle_tag(input, types, tags, open, i, output);
                        next = open;
                        continue;
                    }
                    Err(run_start) => {
                        warn!(start = run_start, end = i, "malformed tag, processing as text");
                        self.defects.push(FixDefect::MalformedTag {
                            start: run_start,
                            end: i,
                        });
                        self.start_tag.clear();
                        plain_floor = run_start;
                    }
                }
            }

            // Every space is settled here by its own class.
            if is_punctuation(ch) || is_symbol(ch) || MirroredPairMap::contains(ch) || ch == SPACE
            {
                match self.direction_at(types, i, classification.dominant) {
                    Direction::RightToLeft => {
                        self.flush_pending(output);
                        output.push(MirroredPairMap::mirror(ch));
                    }
                    Direction::LeftToRight => self.ltr.push(ch),
                }
                continue;
            }

            if is_ltr_letter(ch)
                || is_number(ch, options.preserve_numbers, options.farsi)
                || is_surrogate(ch)
            {
                self.ltr.push(ch);
                continue;
            }

            self.flush_pending(output);
            if !is_dropped(ch) {
                output.push(ch);
            }
        }

        self.flush_pending(output);
    }

    fn reset(&mut self) {
        self.ltr.clear();
        self.start_tag.clear();
        self.end_tag.clear();
        self.staged.clear();
        self.pending_closes.clear();
        self.defects.clear();
    }

    fn direction_at(&mut self, types: &[ResolvedType], i: usize, dominant: Direction) -> Direction {
        match types[i].direction() {
            Some(direction) => direction,
            None => {
                debug!(index = i, ?dominant, "no direction, using dominant");
                self.defects.push(FixDefect::ResidualDirection { index: i });
                dominant
            }
        }
    }

    /// Collect the tag ending at `end` into `start_tag`, back to its `<`.
    ///
    /// Returns the index of `<`, or the start of the run to reprocess when
    /// the run holds no `<` or a space follows it.
    fn collect_tag<B: CharBuffer + ?Sized>(
        &mut self,
        input: &B,
        types: &[ResolvedType],
        end: usize,
    ) -> Result<usize, usize> {
        self.start_tag.clear();
        let mut j = end;
        loop {
            let ch = input.get(j);
            self.start_tag.push(ch);
            if ch == TAG_OPEN {
                if j < end && input.get(j + 1) == SPACE {
                    return Err(j);
                }
                return Ok(j);
            }
            if j == 0 || types[j - 1] != ResolvedType::Tag {
                return Err(j);
            }
            j -= 1;
        }
    }

    fn handle_tag<B, O>(
        &mut self,
        input: &B,
        types: &[ResolvedType],
        tags: &[TagSpan],
        open: usize,
        end: usize,
        output: &mut O,
    ) where
        B: CharBuffer + ?Sized,
        O: CharBuffer + ?Sized,
    {
        let head = parse_head(input, open, end);
        let kind = head.kind();
        if kind.is_none() {
            warn!(name = %head.name, start = open, end, "unknown tag type, passing through");
            self.defects.push(FixDefect::UnknownTagType {
                name: head.name.clone(),
                start: open,
                end,
            });
        }

        if head.closing {
            let context = types[..open].iter().rev().find_map(|t| t.direction());
            if context == Some(Direction::LeftToRight) {
                match find_opening(input, tags, open, &head) {
                    Some(opening) => {
                        self.stage_end_tag();
                        self.staged.append(&mut self.ltr);
                        self.end_tag.append(&mut self.start_tag);
                        self.pending_closes.push(PendingClose { opening });
                    }
                    // No opening tag anywhere before it: plain text in the run.
                    None => self.ltr.append(&mut self.start_tag),
                }
            } else {
                self.flush_pending(output);
                self.emit_start_tag(output);
            }
            return;
        }

        if self.ltr.is_empty() && self.end_tag.is_empty() && self.staged.is_empty() {
            self.emit_start_tag(output);
            return;
        }

        let matched = tags
            .iter()
            .position(|span| span.start == open)
            .and_then(|index| self.pending_closes.iter().rposition(|p| p.opening == index));
        self.stage_end_tag();
        match matched {
            Some(position) => self.pending_closes.truncate(position),
            None => {
                if let Some(closing) = kind.and_then(|k| k.closing_tag()) {
                    self.staged.extend(closing.chars().rev().map(u32::from));
                }
            }
        }
        self.staged.append(&mut self.ltr);
        self.staged.append(&mut self.start_tag);
    }

    /// Move the cached closing tag into the staged unit.
    fn stage_end_tag(&mut self) {
        self.staged.append(&mut self.end_tag);
    }

    fn emit_start_tag<O: CharBuffer + ?Sized>(&mut self, output: &mut O) {
        flush_reversed(&mut self.start_tag, output);
    }

    /// Emit the cached closing tag, then the pending run, then the staged
    /// unit, each in reading order.
    fn flush_pending<O: CharBuffer + ?Sized>(&mut self, output: &mut O) {
        flush_reversed(&mut self.end_tag, output);
        flush_reversed(&mut self.ltr, output);
        flush_reversed(&mut self.staged, output);
        self.pending_closes.clear();
    }
}

fn flush_reversed<O: CharBuffer + ?Sized>(buffer: &mut Vec<u32>, output: &mut O) {
    for &ch in buffer.iter().rev() {
        output.push(ch);
    }
    buffer.clear();
}

/// Find the opening tag closed by the tag at `close`, searching the spans
/// before it by name and skipping nested pairs of the same name.
fn find_opening<B: CharBuffer + ?Sized>(
    input: &B,
    tags: &[TagSpan],
    close: usize,
    head: &TagHead,
) -> Option<usize> {
    let mut depth = 0usize;
    for (index, span) in tags.iter().enumerate().rev() {
        if span.start >= close || span.end >= input.len() {
            continue;
        }
        let candidate = parse_head(input, span.start, span.end);
        if candidate.name != head.name {
            continue;
        }
        if candidate.closing {
            depth += 1;
        } else if depth == 0 {
            return Some(index);
        } else {
            depth -= 1;
        }
    }
    None
}
