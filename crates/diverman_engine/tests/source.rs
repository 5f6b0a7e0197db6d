use std::fs;

use diverman_engine::{extract_file, extract_file_with_threshold, read_url_list, InputError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn small_file_is_extracted_whole() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("input.txt");
    fs::write(&file, "Visit report.pdf or my-super-file.docx now").unwrap();

    let result = extract_file(&file).unwrap();
    assert!(result.filenames.contains("report.pdf"));
    assert!(result.filenames.contains("my-super-file.docx"));
    assert!(result.hyphen_words.contains("my-super-file"));
}

#[test]
fn line_by_line_read_matches_whole_read() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("big.txt");
    let content = "first-line a.zip\nsecond_line b.PNG\n\nthird x-y-z\nno newline at end";
    fs::write(&file, content).unwrap();

    let whole = extract_file_with_threshold(&file, u64::MAX).unwrap();
    let chunked = extract_file_with_threshold(&file, 0).unwrap();
    assert_eq!(whole, chunked);
    assert_eq!(chunked.words.last().map(String::as_str), Some("end"));
}

#[test]
fn missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let err = extract_file(&temp.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, InputError::NotFound(_)));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn invalid_utf8_does_not_fail() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("latin.txt");
    fs::write(&file, b"caf\xe9 menu.pdf").unwrap();

    let result = extract_file(&file).unwrap();
    assert!(result.filenames.contains("menu.pdf"));
}

#[test]
fn url_list_skips_blank_lines() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("urls.txt");
    fs::write(&file, "http://a.test/\n\n   \nhttp://b.test/x\n").unwrap();

    let urls = read_url_list(&file).unwrap();
    assert_eq!(urls, vec!["http://a.test/", "http://b.test/x"]);
}

#[test]
fn missing_url_list_is_not_found() {
    let temp = TempDir::new().unwrap();
    let err = read_url_list(&temp.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, InputError::NotFound(_)));
}

#[test]
fn line_by_line_read_keeps_detected_legacy_encoding() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("latin-big.txt");
    fs::write(&file, b"caf\xe9 menu.pdf\nna\xefve r\xe9sum\xe9.doc\n").unwrap();

    let whole = extract_file_with_threshold(&file, u64::MAX).unwrap();
    let chunked = extract_file_with_threshold(&file, 0).unwrap();
    assert_eq!(whole, chunked);
    assert!(chunked.words.contains(&"café".to_string()));
    assert!(chunked.words.contains(&"naïve".to_string()));
    assert!(chunked.filenames.contains("résumé.doc"));
}
