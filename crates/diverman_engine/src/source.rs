use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use diverman_core::{extract, parse_url_list, ExtractionResult};
use diverman_logging::diag_info;
use thiserror::Error;

use crate::decode::{decode_text, decode_with, detect_encoding};

/// Files larger than this are scanned line by line instead of read whole.
pub const CHUNKED_READ_THRESHOLD: u64 = 10 * 1024 * 1024;

/// Prefix of a large file used to pick the encoding for all of its lines.
const DETECTION_BLOCK_BYTES: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => InputError::PermissionDenied(path.to_path_buf()),
            _ => InputError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Extracts tokens from a local text file.
pub fn extract_file(path: &Path) -> Result<ExtractionResult, InputError> {
    extract_file_with_threshold(path, CHUNKED_READ_THRESHOLD)
}

/// Like [`extract_file`] with an explicit size above which the file is
/// streamed line by line. No token can contain a newline; the encoding of a
/// streamed file is detected from its first block only, so a file whose
/// non-ASCII bytes all sit beyond that block may decode differently.
pub fn extract_file_with_threshold(
    path: &Path,
    threshold: u64,
) -> Result<ExtractionResult, InputError> {
    let meta = fs::metadata(path).map_err(|e| InputError::from_io(path, e))?;
    if meta.len() <= threshold {
        let bytes = fs::read(path).map_err(|e| InputError::from_io(path, e))?;
        return Ok(extract(&decode_text(&bytes, None).text));
    }

    diag_info!(
        "{}: {} bytes, reading line by line",
        path.display(),
        meta.len()
    );
    let file = File::open(path).map_err(|e| InputError::from_io(path, e))?;
    let mut reader = BufReader::with_capacity(DETECTION_BLOCK_BYTES, file);
    let head = reader.fill_buf().map_err(|e| InputError::from_io(path, e))?;
    let encoding = detect_encoding(head, None);
    diag_info!("{}: decoding as {}", path.display(), encoding.name());

    let mut result = ExtractionResult::default();
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| InputError::from_io(path, e))?;
        if read == 0 {
            break;
        }
        result.append(extract(&decode_with(&line, encoding).text));
    }
    Ok(result)
}

/// Reads a newline-delimited URL list, skipping blank lines.
pub fn read_url_list(path: &Path) -> Result<Vec<String>, InputError> {
    let bytes = fs::read(path).map_err(|e| InputError::from_io(path, e))?;
    Ok(parse_url_list(&String::from_utf8_lossy(&bytes)))
}
