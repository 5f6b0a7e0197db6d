//! Diverman core: token extraction, merging and rendering. No IO.
mod extract;
mod harvest;
mod headers;
mod present;
mod urls;

pub use extract::{
    extract, extract_filenames, extract_hyphen_words, extract_words, is_known_extension,
    ExtractionResult, EXTENSIONS,
};
pub use harvest::Harvest;
pub use headers::{parse_headers, HeaderMap, ParsedHeaders};
pub use present::{render, render_extraction, render_harvest, write_lines};
pub use urls::parse_url_list;
