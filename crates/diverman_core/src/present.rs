use std::collections::HashSet;
use std::io::{self, Write};

use crate::extract::ExtractionResult;
use crate::harvest::Harvest;

/// Renders the three token groups as output lines: words, then hyphenated
/// words, then filenames.
///
/// Words are printed once each in the order given. A word containing `_` is
/// followed by its non-empty pieces, skipping any piece already printed.
/// The two set groups are printed in sorted order.
pub fn render<'a, W, H, F>(words: W, hyphen_words: H, filenames: F) -> Vec<String>
where
    W: IntoIterator<Item = &'a str>,
    H: IntoIterator<Item = &'a str>,
    F: IntoIterator<Item = &'a str>,
{
    let mut lines = render_words(words);

    let mut hyphen: Vec<&str> = hyphen_words.into_iter().collect();
    hyphen.sort_unstable();
    hyphen.dedup();
    lines.extend(hyphen.into_iter().map(str::to_string));

    let mut files: Vec<&str> = filenames.into_iter().collect();
    files.sort_unstable();
    files.dedup();
    lines.extend(files.into_iter().map(str::to_string));

    lines
}

pub fn render_extraction(result: &ExtractionResult) -> Vec<String> {
    render(
        result.words.iter().map(String::as_str),
        result.hyphen_words.iter().map(String::as_str),
        result.filenames.iter().map(String::as_str),
    )
}

pub fn render_harvest(harvest: &Harvest) -> Vec<String> {
    render(
        harvest.words.iter().map(String::as_str),
        harvest.hyphen_words.iter().map(String::as_str),
        harvest.filenames.iter().map(String::as_str),
    )
}

/// Writes each line followed by `\n`.
pub fn write_lines<Wr: Write>(writer: &mut Wr, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

fn render_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut lines = Vec::new();
    for word in words {
        if seen.insert(word) {
            lines.push(word.to_string());
        }
        if word.contains('_') {
            for piece in word.split('_').filter(|piece| !piece.is_empty()) {
                if seen.insert(piece) {
                    lines.push(piece.to_string());
                }
            }
        }
    }
    lines
}
