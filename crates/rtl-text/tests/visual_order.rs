use anyhow::Result;
use rtl_text::{
    CharBuffer, Direction, FixOptions, ResolvedType, RtlFixer, TagScanner, TextBuffer, classify,
};

fn fix(text: &str) -> String {
    RtlFixer::new().fix_to_string(text, FixOptions::default())
}

#[test]
fn left_to_right_only_text_is_identity() {
    for text in ["abc", "Hello world", "Rust 2024 edition", "x"] {
        assert_eq!(fix(text), text);
    }
}

#[test]
fn right_to_left_only_text_is_reversed() {
    let text = "سلام";
    let reversed: String = text.chars().rev().collect();
    assert_eq!(fix(text), reversed);
}

#[test]
fn left_to_right_run_keeps_internal_order() {
    // R1 R2 L1 L2 -> L1 L2 R2 R1
    assert_eq!(fix("بتxy"), "xyتب");
}

#[test]
fn brackets_between_arabic_neighbours_are_swapped_and_emitted_directly() {
    let input = TextBuffer::from("ب(xy)ت");
    let classification = classify(&input, &[]);
    assert_eq!(classification.types[1], ResolvedType::RightToLeft);
    assert_eq!(classification.types[4], ResolvedType::RightToLeft);
    assert_eq!(classification.dominant, Direction::RightToLeft);

    assert_eq!(fix("ب(xy)ت"), "ت(xy)ب");
}

#[test]
fn tagged_span_is_emitted_whole() {
    let out = fix("بت <color=red>xy zw</color> ثج");
    assert!(out.contains("<color=red>xy zw</color>"), "got {out:?}");
    assert!(out.starts_with("جث "), "got {out:?}");
    assert!(out.ends_with(" تب"), "got {out:?}");
}

#[test]
fn sentinels_are_removed_from_output() {
    let text = "ب\u{FFFF}ت\u{200C}ث";
    let out = fix(text);
    assert!(!out.contains('\u{FFFF}'));
    assert!(!out.contains('\u{200C}'));
    assert_eq!(out.chars().count(), text.chars().count() - 2);
}

#[test]
fn output_buffer_is_replaced_each_call() {
    let mut fixer = RtlFixer::with_provider(TagScanner::new());
    let mut output = TextBuffer::new();
    fixer.fix("بت", FixOptions::default(), &mut output);
    fixer.fix("ab", FixOptions::default(), &mut output);
    assert_eq!(output.len(), 2);
    assert_eq!(output.to_string_lossy(), "ab");
}

#[test]
fn utf16_input_keeps_surrogate_pairs() -> Result<()> {
    let units: Vec<u16> = "ب😀ت".encode_utf16().collect();
    let input = TextBuffer::from_utf16(&units);
    let mut output = TextBuffer::new();
    RtlFixer::new().fix_buffer(&input, &[], FixOptions::default(), &mut output);

    let visual: Vec<u16> = output.as_slice().iter().map(|&u| u as u16).collect();
    assert_eq!(String::from_utf16(&visual)?, "ت😀ب");
    Ok(())
}
