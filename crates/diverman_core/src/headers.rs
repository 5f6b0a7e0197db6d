use std::collections::BTreeMap;

/// Caller-supplied request headers. Keys are kept exactly as written.
pub type HeaderMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedHeaders {
    pub headers: HeaderMap,
    /// Entries that were dropped, verbatim, so the caller can warn about them.
    pub rejected: Vec<String>,
}

/// Parses `"key1:value1,key2:value2"`.
///
/// Each entry is split on its first colon and both halves are trimmed, so
/// values may contain further colons (`Referer:http://x`). Entries without a
/// colon (including the empty entry left by a stray comma) or with an empty key
/// are rejected. A blank string yields no headers and no rejections. A later
/// entry replaces an earlier one with the same key.
pub fn parse_headers(raw: &str) -> ParsedHeaders {
    let mut parsed = ParsedHeaders::default();
    if raw.trim().is_empty() {
        return parsed;
    }
    for entry in raw.split(',') {
        match entry.split_once(':') {
            Some((key, value)) if !key.trim().is_empty() => {
                parsed
                    .headers
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
            _ => parsed.rejected.push(entry.to_string()),
        }
    }
    parsed
}
