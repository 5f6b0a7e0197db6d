use std::fmt;

use diverman_core::Harvest;

/// Text body of one successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedText {
    pub url: String,
    pub final_url: String,
    pub text: String,
    /// Set when only a prefix of an oversized body was read.
    pub truncated: bool,
    pub encoding_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Connection,
    HttpStatus(u16),
    Request,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Connection => write!(f, "connection error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Request => write!(f, "request error"),
        }
    }
}

/// A URL that contributed nothing to the harvest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFailure {
    pub url: String,
    pub error: FetchError,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateReport {
    pub harvest: Harvest,
    pub failures: Vec<UrlFailure>,
    pub succeeded: usize,
}
