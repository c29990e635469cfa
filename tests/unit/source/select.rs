use super::*;

#[test]
fn short_paragraphs_are_dropped_and_output_capped() {
    let long = |i: usize| format!("{i} {}", "x".repeat(MIN_PARAGRAPH_CHARS));
    let mut candidates = vec!["too short".to_string(), "x".repeat(MIN_PARAGRAPH_CHARS)];
    candidates.extend((0..8).map(long));

    let kept = select_paragraphs(candidates);
    assert_eq!(kept.len(), MAX_PARAGRAPHS);
    assert!(kept[0].starts_with("0 "));
    assert!(kept[4].starts_with("4 "));
}

#[test]
fn length_is_measured_after_trimming() {
    let padded = format!("   {}   ", "y".repeat(MIN_PARAGRAPH_CHARS));
    assert!(select_paragraphs([padded]).is_empty());

    let ok = format!("  {}  ", "y".repeat(MIN_PARAGRAPH_CHARS + 1));
    assert_eq!(
        select_paragraphs([ok]),
        vec!["y".repeat(MIN_PARAGRAPH_CHARS + 1)]
    );
}
