use std::collections::BTreeSet;
use std::sync::Once;

use diverman_core::{extract, extract_filenames, extract_hyphen_words, extract_words};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(diverman_logging::initialize_for_tests);
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn sample_sentence_yields_all_three_groups() {
    init_logging();
    let text = "Visit report.pdf or my-super-file.docx now, user_id_123 is set.";
    let result = extract(text);

    assert_eq!(
        result.words,
        vec![
            "Visit", "report", "pdf", "or", "my", "super", "file", "docx", "now", "user_id_123",
            "is", "set"
        ]
    );
    assert_eq!(result.hyphen_words, set(&["my-super-file"]));
    assert_eq!(result.filenames, set(&["my-super-file.docx", "report.pdf"]));
}

#[test]
fn extraction_is_deterministic() {
    let text = "a-b c.zip d_e a-b c.zip f.PNG";
    assert_eq!(extract(text), extract(text));
}

#[test]
fn unknown_extensions_are_not_filenames() {
    let found = extract_filenames("report.xyz notes.txt archive.foo data.json");
    assert_eq!(found, set(&["data.json", "notes.txt"]));
}

#[test]
fn extension_match_ignores_case_but_keeps_spelling() {
    let found = extract_filenames("IMAGE.PNG Setup.Exe");
    assert_eq!(found, set(&["IMAGE.PNG", "Setup.Exe"]));
}

#[test]
fn longer_extension_wins_when_prefix_is_not_a_word_boundary() {
    let found = extract_filenames("index.php5 page.html style.css");
    assert_eq!(found, set(&["index.php5", "page.html", "style.css"]));
}

#[test]
fn extension_must_end_at_word_boundary() {
    assert!(extract_filenames("file.pdfx file.zipped").is_empty());
}

#[test]
fn nested_extension_reports_first_span() {
    assert_eq!(extract_filenames("archive.tar.gz"), set(&["archive.tar"]));
}

#[test]
fn filenames_are_deduplicated() {
    assert_eq!(extract_filenames("a.txt a.txt a.txt"), set(&["a.txt"]));
}

#[test]
fn hyphen_words_need_two_segments() {
    assert!(extract_hyphen_words("-word word- - --").is_empty());
    assert_eq!(
        extract_hyphen_words("well-known state-of-the-art -lead trail-"),
        set(&["state-of-the-art", "well-known"])
    );
}

#[test]
fn double_hyphen_does_not_join_segments() {
    assert!(extract_hyphen_words("a--b").is_empty());
}

#[test]
fn words_include_digits_and_underscores() {
    assert_eq!(extract_words("x1 _y 42"), vec!["x1", "_y", "42"]);
}

#[test]
fn words_are_unicode_aware() {
    assert_eq!(extract_words("café naïve"), vec!["café", "naïve"]);
}

#[test]
fn empty_text_yields_nothing() {
    let result = extract("");
    assert!(result.is_empty());
    assert!(extract("  ,.;- ").is_empty());
}

#[test]
fn append_concatenates_words_and_unions_sets() {
    let mut first = extract("one a-b x.txt");
    first.append(extract("one c-d x.txt"));
    assert_eq!(first.words, vec!["one", "a", "b", "x", "txt", "one", "c", "d", "x", "txt"]);
    assert_eq!(first.hyphen_words, set(&["a-b", "c-d"]));
    assert_eq!(first.filenames, set(&["x.txt"]));
}
