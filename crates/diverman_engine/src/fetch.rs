use std::io::{self, Write};
use std::time::Duration;

use diverman_core::HeaderMap;
use diverman_logging::{diag_debug, diag_warn};
use flate2::write::{GzDecoder, ZlibDecoder};
use futures_util::StreamExt;
use reqwest::header::{
    self, HeaderName, HeaderValue, CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE,
};

use crate::decode::decode_text;
use crate::{FailureKind, FetchError, FetchedText};

pub const DEFAULT_USER_AGENT: &str = concat!("diverman/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_ACCEPT_ENCODING: &str = "gzip, deflate";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    /// Bodies announced larger than this are only partially read.
    pub large_response_bytes: u64,
    /// How much of an oversized body is read.
    pub truncated_read_bytes: u64,
    pub user_agent: String,
    /// Caller headers; they override the defaults on a name collision.
    pub headers: HeaderMap,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 10,
            large_response_bytes: 10 * 1024 * 1024,
            truncated_read_bytes: 1024 * 1024,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: HeaderMap::new(),
        }
    }
}

impl FetchSettings {
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout = Duration::from_secs(secs);
        self.connect_timeout = self.connect_timeout.min(self.request_timeout);
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedText, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .default_headers(merged_headers(&settings))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Request, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    fn read_limit(&self, url: &str, content_length: Option<u64>) -> Option<u64> {
        let announced = content_length?;
        if announced <= self.settings.large_response_bytes {
            return None;
        }
        diag_warn!(
            "{url}: response of {announced} bytes exceeds {} bytes, reading only the first {} bytes",
            self.settings.large_response_bytes,
            self.settings.truncated_read_bytes
        );
        Some(self.settings.truncated_read_bytes)
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedText, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::Request, format!("invalid url: {err}")))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let final_url = response.url().to_string();
        let content_type = header_str(&response, CONTENT_TYPE);
        let announced = header_str(&response, CONTENT_LENGTH).and_then(|v| v.trim().parse().ok());
        let limit = self.read_limit(url, announced);
        let encoding = header_str(&response, CONTENT_ENCODING);
        let mut body = BodyDecoder::for_encoding(url, encoding.as_deref());

        let mut truncated = false;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            body.push(&chunk).map_err(|err| body_error(url, err))?;
            if let Some(limit) = limit {
                if body.len() as u64 >= limit {
                    truncated = true;
                    break;
                }
            }
        }
        let mut bytes = body.finish(!truncated).map_err(|err| body_error(url, err))?;
        if let Some(limit) = limit {
            bytes.truncate(limit as usize);
        }

        let decoded = decode_text(&bytes, content_type.as_deref());
        diag_debug!(
            "{url}: read {} bytes as {} (final url {final_url})",
            bytes.len(),
            decoded.encoding_label
        );

        Ok(FetchedText {
            url: url.to_string(),
            final_url,
            text: decoded.text,
            truncated,
            encoding_label: decoded.encoding_label,
        })
    }
}

fn header_str(response: &reqwest::Response, name: HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

fn body_error(url: &str, err: io::Error) -> FetchError {
    FetchError::new(FailureKind::Request, format!("{url}: undecodable body: {err}"))
}

/// Undoes the `Content-Encoding` of a body as its chunks arrive, so the read
/// limit counts decoded bytes while `Content-Length` stays the wire size.
enum BodyDecoder {
    Identity(Vec<u8>),
    Gzip(GzDecoder<Vec<u8>>),
    Deflate(ZlibDecoder<Vec<u8>>),
}

impl BodyDecoder {
    fn for_encoding(url: &str, encoding: Option<&str>) -> Self {
        match encoding.map(|e| e.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("identity") => BodyDecoder::Identity(Vec::new()),
            Some("gzip") | Some("x-gzip") => BodyDecoder::Gzip(GzDecoder::new(Vec::new())),
            Some("deflate") => BodyDecoder::Deflate(ZlibDecoder::new(Vec::new())),
            Some(other) => {
                diag_warn!("{url}: unsupported content encoding {other}, reading body as is");
                BodyDecoder::Identity(Vec::new())
            }
        }
    }

    fn push(&mut self, chunk: &[u8]) -> io::Result<()> {
        match self {
            BodyDecoder::Identity(bytes) => {
                bytes.extend_from_slice(chunk);
                Ok(())
            }
            BodyDecoder::Gzip(decoder) => {
                decoder.write_all(chunk)?;
                decoder.flush()
            }
            BodyDecoder::Deflate(decoder) => {
                decoder.write_all(chunk)?;
                decoder.flush()
            }
        }
    }

    fn len(&self) -> usize {
        match self {
            BodyDecoder::Identity(bytes) => bytes.len(),
            BodyDecoder::Gzip(decoder) => decoder.get_ref().len(),
            BodyDecoder::Deflate(decoder) => decoder.get_ref().len(),
        }
    }

    /// A body cut short by the read limit is returned without checking its
    /// trailer.
    fn finish(self, complete: bool) -> io::Result<Vec<u8>> {
        match self {
            BodyDecoder::Identity(bytes) => Ok(bytes),
            BodyDecoder::Gzip(mut decoder) if !complete => Ok(std::mem::take(decoder.get_mut())),
            BodyDecoder::Deflate(mut decoder) if !complete => Ok(std::mem::take(decoder.get_mut())),
            BodyDecoder::Gzip(decoder) => decoder.finish(),
            BodyDecoder::Deflate(decoder) => decoder.finish(),
        }
    }
}

fn merged_headers(settings: &FetchSettings) -> header::HeaderMap {
    let mut merged = header::HeaderMap::new();
    merged.insert(
        header::ACCEPT_ENCODING,
        HeaderValue::from_static(DEFAULT_ACCEPT_ENCODING),
    );
    match HeaderValue::from_str(&settings.user_agent) {
        Ok(value) => {
            merged.insert(header::USER_AGENT, value);
        }
        Err(_) => diag_warn!("Ignoring invalid user agent: {}", settings.user_agent),
    }

    for (key, raw) in &settings.headers {
        match (HeaderName::from_bytes(key.as_bytes()), HeaderValue::from_str(raw)) {
            (Ok(name), Ok(value)) => {
                merged.insert(name, value);
            }
            _ => diag_warn!("Ignoring invalid header: {key}:{raw}"),
        }
    }
    merged
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_connect() {
        return FetchError::new(FailureKind::Connection, err.to_string());
    }
    if let Some(status) = err.status() {
        return FetchError::new(FailureKind::HttpStatus(status.as_u16()), err.to_string());
    }
    FetchError::new(FailureKind::Request, err.to_string())
}
