use diverman_core::{extract, render, render_extraction, render_harvest, write_lines, Harvest};
use pretty_assertions::assert_eq;

const NONE: [&str; 0] = [];

#[test]
fn underscore_pieces_follow_their_word_once() {
    let lines = render(["foo", "foo_bar_baz", "bar"], NONE, NONE);
    assert_eq!(lines, vec!["foo", "foo_bar_baz", "bar", "baz"]);
}

#[test]
fn underscore_word_expands_even_when_piece_seen_later() {
    let lines = render(["foo_bar_baz", "foo", "baz"], NONE, NONE);
    assert_eq!(lines, vec!["foo_bar_baz", "foo", "bar", "baz"]);
}

#[test]
fn repeated_words_print_once_in_first_seen_order() {
    let lines = render(["b", "a", "b", "c", "a"], NONE, NONE);
    assert_eq!(lines, vec!["b", "a", "c"]);
}

#[test]
fn groups_are_emitted_words_then_hyphens_then_files() {
    let lines = render(["w"], ["z-z", "a-a"], ["b.txt", "a.pdf"]);
    assert_eq!(lines, vec!["w", "a-a", "z-z", "a.pdf", "b.txt"]);
}

#[test]
fn end_to_end_sample_renders_expected_lines() {
    let result = extract("Visit report.pdf or my-super-file.docx now, user_id_123 is set.");
    let lines = render_extraction(&result);

    for expected in ["user_id_123", "user", "id", "123", "my-super-file", "report.pdf", "my-super-file.docx"] {
        assert_eq!(
            lines.iter().filter(|line| line.as_str() == expected).count(),
            1,
            "expected exactly one {expected:?} in {lines:?}"
        );
    }

    let hyphen_at = lines.iter().position(|l| l == "my-super-file").unwrap();
    let file_at = lines.iter().position(|l| l == "my-super-file.docx").unwrap();
    let last_word_at = lines.iter().position(|l| l == "set").unwrap();
    assert!(last_word_at < hyphen_at && hyphen_at < file_at);
}

#[test]
fn harvest_renders_words_sorted() {
    let mut harvest = Harvest::new();
    harvest.absorb(extract("zeta alpha_beta"));
    let lines = render_harvest(&harvest);
    assert_eq!(lines, vec!["alpha_beta", "alpha", "beta", "zeta"]);
}

#[test]
fn write_lines_terminates_every_line() {
    let mut out = Vec::new();
    write_lines(&mut out, &["a".to_string(), "b-c".to_string()]).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a\nb-c\n");
}

#[test]
fn empty_input_renders_nothing() {
    assert!(render_extraction(&extract("")).is_empty());
}
