use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Extensions that qualify a dotted token as a filename. Matched case-insensitively.
pub const EXTENSIONS: &[&str] = &[
    "3g2", "3gp", "7z", "ai", "aif", "apk", "arj", "asp", "aspx", "avi", "bak", "bat", "bin",
    "bmp", "cab", "cda", "cer", "cfg", "cfm", "cgi", "class", "cpl", "cpp", "css", "csv", "cur",
    "dat", "db", "dbf", "deb", "dll", "dmg", "dmp", "doc", "docx", "drv", "email", "eml", "emlx",
    "exe", "flv", "fnt", "fon", "gadget", "gif", "git", "h264", "hta", "htm", "html", "icns",
    "ico", "inc", "ini", "iso", "jar", "java", "jhtml", "jpeg", "jpg", "js", "jsa", "jsp", "key",
    "lnk", "log", "m4v", "mdb", "mid", "mkv", "mov", "mp3", "mp4", "mpa", "mpeg", "mpg", "msg",
    "msi", "nsf", "odp", "ods", "odt", "oft", "ogg", "ost", "otf", "part", "pcap", "pdb", "pdf",
    "phar", "php", "php2", "php3", "php4", "php5", "php6", "php7", "phps", "pht", "phtml", "pkg",
    "pl", "png", "pps", "ppt", "pptx", "ps", "psd", "pst", "py", "rar", "reg", "rm", "rpm", "rss",
    "rtf", "sav", "sh", "shtml", "sql", "svg", "swf", "swift", "sys", "tar", "targz", "tex", "tif",
    "tiff", "tmp", "toast", "ttf", "txt", "vb", "vcd", "vcf", "vob", "wav", "wma", "wmv", "wpd",
    "wpl", "wsf", "xhtml", "xls", "xlsm", "xlsx", "xml", "z", "zip", "json",
];

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern"));

static HYPHEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+(?:-\w+)+\b").expect("hyphen pattern"));

static FILENAME_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"\b\w+(?:-\w+)*\.(?i:{})\b", EXTENSIONS.join("|"));
    Regex::new(&pattern).expect("filename pattern")
});

/// Tokens found in one text buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionResult {
    /// Every word in discovery order, duplicates kept.
    pub words: Vec<String>,
    pub hyphen_words: BTreeSet<String>,
    pub filenames: BTreeSet<String>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.hyphen_words.is_empty() && self.filenames.is_empty()
    }

    /// Appends the tokens of a later chunk of the same input.
    pub fn append(&mut self, other: ExtractionResult) {
        self.words.extend(other.words);
        self.hyphen_words.extend(other.hyphen_words);
        self.filenames.extend(other.filenames);
    }
}

/// Runs the three independent scans over `text`.
pub fn extract(text: &str) -> ExtractionResult {
    ExtractionResult {
        words: extract_words(text),
        hyphen_words: extract_hyphen_words(text),
        filenames: extract_filenames(text),
    }
}

pub fn extract_words(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn extract_hyphen_words(text: &str) -> BTreeSet<String> {
    HYPHEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn extract_filenames(text: &str) -> BTreeSet<String> {
    FILENAME_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn is_known_extension(ext: &str) -> bool {
    EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext))
}
