//! Diverman engine: fetching, file input and concurrent aggregation.
mod aggregate;
mod decode;
mod fetch;
mod source;
mod types;

pub use aggregate::{Aggregator, DEFAULT_CONCURRENCY};
pub use decode::{decode_text, decode_with, detect_encoding, DecodedText};
pub use fetch::{
    FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_ACCEPT_ENCODING, DEFAULT_USER_AGENT,
};
pub use source::{
    extract_file, extract_file_with_threshold, read_url_list, InputError, CHUNKED_READ_THRESHOLD,
};
pub use types::{AggregateReport, FailureKind, FetchError, FetchedText, UrlFailure};
