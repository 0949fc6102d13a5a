use field_diff::{DiffAlgorithm, DiffConfig, DiffGranularity, DiffResult, DiffSpan, TextDiff};
use pretty_assertions::assert_eq;

#[test]
fn test_empty_texts() {
    // Two empty texts produce no spans at all
    let diff = TextDiff::diff("", "");

    assert!(diff.is_empty());
    assert!(!diff.has_changes());
    assert_eq!(diff.inserted_chars(), 0);
    assert_eq!(diff.deleted_chars(), 0);
}

#[test]
fn test_identical_texts() {
    let text = "Introduction to Linear Algebra";
    let diff = TextDiff::diff(text, text);

    assert_eq!(diff.spans(), &[DiffSpan::equal(text)]);
    assert!(!diff.has_changes());
    assert_eq!(diff.unchanged_chars(), text.chars().count());
}

#[test]
fn test_added_text() {
    // Nothing historical, everything is new
    let diff = TextDiff::diff("", "new text");

    assert_eq!(diff.spans(), &[DiffSpan::insert("new text")]);
    assert_eq!(diff.inserted_chars(), 8);
}

#[test]
fn test_removed_text() {
    let diff = TextDiff::diff("old text", "");

    assert_eq!(diff.spans(), &[DiffSpan::delete("old text")]);
    assert_eq!(diff.deleted_chars(), 8);
}

#[test]
fn test_inserted_word() {
    let diff = TextDiff::diff("The quick fox", "The quick brown fox");

    assert_eq!(
        diff.spans(),
        &[
            DiffSpan::equal("The quick "),
            DiffSpan::insert("brown "),
            DiffSpan::equal("fox"),
        ]
    );
    assert_eq!(diff.old_text(), "The quick fox");
    assert_eq!(diff.new_text(), "The quick brown fox");
}

#[test]
fn test_cleanup_merges_micro_hunks() {
    let old = "a1b2c";
    let new = "a3b4c";

    // Without cleanup every character gets its own hunk
    let raw = DiffConfig::default().edit_cost(0).diff(old, new);
    assert_eq!(
        raw.spans(),
        &[
            DiffSpan::equal("a"),
            DiffSpan::delete("1"),
            DiffSpan::insert("3"),
            DiffSpan::equal("b"),
            DiffSpan::delete("2"),
            DiffSpan::insert("4"),
            DiffSpan::equal("c"),
        ]
    );

    // The default cost folds the lone "b" into one replacement
    let cleaned = TextDiff::diff(old, new);
    assert_eq!(
        cleaned.spans(),
        &[
            DiffSpan::equal("a"),
            DiffSpan::delete("1b2"),
            DiffSpan::insert("3b4"),
            DiffSpan::equal("c"),
        ]
    );
}

#[test]
fn test_word_granularity() {
    let diff = TextDiff::diff_with_granularity(
        "The quick brown fox jumps",
        "The quick red fox jumps",
        DiffGranularity::Word,
    );

    assert_eq!(
        diff.spans(),
        &[
            DiffSpan::equal("The quick "),
            DiffSpan::delete("brown"),
            DiffSpan::insert("red"),
            DiffSpan::equal(" fox jumps"),
        ]
    );
}

#[test]
fn test_line_granularity() {
    let old = "Week 1: Vectors\nWeek 2: Matrices\nWeek 3: Eigenvalues\n";
    let new = "Week 1: Vectors\nWeek 2: Determinants\nWeek 3: Eigenvalues\n";

    let diff = TextDiff::diff_with_granularity(old, new, DiffGranularity::Line);

    assert_eq!(
        diff.spans(),
        &[
            DiffSpan::equal("Week 1: Vectors\n"),
            DiffSpan::delete("Week 2: Matrices\n"),
            DiffSpan::insert("Week 2: Determinants\n"),
            DiffSpan::equal("Week 3: Eigenvalues\n"),
        ]
    );
    assert_eq!(diff.old_text(), old);
    assert_eq!(diff.new_text(), new);
}

#[test]
fn test_changed_line_stays_whole() {
    let diff = TextDiff::diff_with_granularity(
        "Week 2: Matrices\n",
        "Week 2: Determinants\n",
        DiffGranularity::Line,
    );

    assert_eq!(
        diff.spans(),
        &[
            DiffSpan::delete("Week 2: Matrices\n"),
            DiffSpan::insert("Week 2: Determinants\n"),
        ]
    );
}

#[test]
fn test_changed_word_stays_whole() {
    let diff =
        TextDiff::diff_with_granularity("The cat sat", "The car sat", DiffGranularity::Word);

    assert_eq!(
        diff.spans(),
        &[
            DiffSpan::equal("The "),
            DiffSpan::delete("cat"),
            DiffSpan::insert("car"),
            DiffSpan::equal(" sat"),
        ]
    );
}

#[test]
fn test_patience_algorithm() {
    let diff = DiffConfig::default()
        .algorithm(DiffAlgorithm::Patience)
        .granularity(DiffGranularity::Word)
        .diff("The quick brown fox jumps", "The quick red fox jumps");

    assert_eq!(
        diff.spans(),
        &[
            DiffSpan::equal("The quick "),
            DiffSpan::delete("brown"),
            DiffSpan::insert("red"),
            DiffSpan::equal(" fox jumps"),
        ]
    );
}

#[test]
fn test_inline_diff() {
    assert_eq!(
        TextDiff::inline_diff("The quick fox", "The quick brown fox"),
        "The quick {+brown +}fox"
    );
}

#[test]
fn test_result_accessors() {
    let diff = DiffResult::from(vec![DiffSpan::equal("ab"), DiffSpan::insert("c")]);

    assert_eq!(diff.span_count(), 2);
    assert_eq!(diff.span(1), Some(&DiffSpan::insert("c")));
    assert_eq!(diff.span(2), None);
    assert_eq!(diff.span(0).map(|s| s.to_string()), Some("equal(\"ab\")".to_string()));
}
