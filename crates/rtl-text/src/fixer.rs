//! The fix pipeline: tag spans, classification, reordering.
//!
//! Diacritic stripping and glyph shaping run before this and are the
//! caller's job; the fixer sees their output as plain code units.

use crate::bidi::{Classifier, ReorderEngine};
use crate::buffer::{CharBuffer, TextBuffer};
use crate::error::FixDefect;
use crate::markup::{TagScanner, TagSpan, TagSpanProvider};

/// Per-call switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixOptions {
    /// Treat Extended Arabic-Indic digits as the native number set
    /// instead of Arabic-Indic digits.
    pub farsi: bool,
    /// Keep markup tags intact and move tagged runs as one unit. When
    /// off, `<` and `>` are ordinary symbols.
    pub fix_text_tags: bool,
    /// Keep every digit set in reading order.
    pub preserve_numbers: bool,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            farsi: true,
            fix_text_tags: true,
            preserve_numbers: false,
        }
    }
}

/// Reusable fixer owning the scratch buffers of one caller.
#[derive(Debug)]
pub struct RtlFixer<P = TagScanner> {
    classifier: Classifier,
    engine: ReorderEngine,
    provider: P,
    input: TextBuffer,
}

impl Default for RtlFixer<TagScanner> {
    fn default() -> Self {
        Self::new()
    }
}

impl RtlFixer<TagScanner> {
    pub fn new() -> Self {
        Self::with_provider(TagScanner::new())
    }
}

impl<P: TagSpanProvider> RtlFixer<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            classifier: Classifier::new(),
            engine: ReorderEngine::new(),
            provider,
            input: TextBuffer::with_capacity(2048),
        }
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Defects recorded by the last fix.
    pub fn defects(&self) -> &[FixDefect] {
        self.engine.defects()
    }

    /// Fix `text` into `output`, replacing its contents.
    pub fn fix<O: CharBuffer + ?Sized>(&mut self, text: &str, options: FixOptions, output: &mut O) {
        self.input.set_text(text);
        let tags = if options.fix_text_tags {
            self.provider.find_tags(&self.input)
        } else {
            Vec::new()
        };
        let classification = self.classifier.classify(&self.input, &tags);
        self.engine
            .reorder(&self.input, &classification, &tags, options, output);
    }

    pub fn fix_to_string(&mut self, text: &str, options: FixOptions) -> String {
        let mut output = TextBuffer::with_capacity(text.len());
        self.fix(text, options, &mut output);
        output.to_string_lossy()
    }

    /// Fix an already prepared buffer with spans from an external
    /// validator. The provider is not consulted.
    pub fn fix_buffer<B, O>(&mut self, input: &B, tags: &[TagSpan], options: FixOptions, output: &mut O)
    where
        B: CharBuffer + ?Sized,
        O: CharBuffer + ?Sized,
    {
        let tags = if options.fix_text_tags { tags } else { &[] };
        let classification = self.classifier.classify(input, tags);
        self.engine.reorder(input, &classification, tags, options, output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_host_defaults() {
        let options = FixOptions::default();
        assert!(options.farsi);
        assert!(options.fix_text_tags);
        assert!(!options.preserve_numbers);
    }

    #[test]
    fn fixes_mixed_text() {
        let mut fixer = RtlFixer::new();
        assert_eq!(fixer.fix_to_string("سلام abc", FixOptions::default()), "abc مالس");
        assert!(fixer.defects().is_empty());
    }

    #[test]
    fn buffer_entry_point_skips_spans_when_tags_are_off() {
        let mut fixer = RtlFixer::new();
        let input = TextBuffer::from("ab>");
        let mut output = TextBuffer::new();
        let options = FixOptions {
            fix_text_tags: false,
            ..FixOptions::default()
        };
        fixer.fix_buffer(&input, &[TagSpan::new(1, 2)], options, &mut output);
        assert_eq!(output.to_string_lossy(), "ab>");
        assert!(fixer.defects().is_empty());
    }

    #[test]
    fn custom_provider_supplies_spans() {
        struct Fixed;
        impl TagSpanProvider for Fixed {
            fn find_tags(&self, _buffer: &dyn CharBuffer) -> Vec<TagSpan> {
                vec![TagSpan::new(2, 4)]
            }
        }

        let mut fixer = RtlFixer::with_provider(Fixed);
        assert_eq!(fixer.fix_to_string("س <b>ab", FixOptions::default()), "<b>ab</b> س");
    }
}
