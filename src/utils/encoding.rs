//! Decoding input files with a known text encoding.
//!
//! Keyword planner exports are UTF-16 with a BOM; the other inputs are UTF-8,
//! sometimes with a BOM. Decoding is strict: malformed input is an error
//! rather than a string full of replacement characters.

use crate::error::{KeywordError, Result};
use encoding_rs::Encoding;
use std::path::Path;

/// Read `path` and decode it with the encoding named by `label`.
///
/// A BOM in the file overrides `label`, so a UTF-16BE export decodes
/// correctly even when configured as plain `utf-16`. The BOM is stripped.
pub fn read_text(path: &Path, label: &str) -> Result<String> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| KeywordError::UnknownEncoding(label.to_string()))?;

    if !path.is_file() {
        return Err(KeywordError::MissingInput { path: path.to_path_buf() });
    }
    let bytes = std::fs::read(path)?;

    let (decoded, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(KeywordError::Decode {
            encoding: used.name().to_lowercase(),
            path: path.to_path_buf(),
        });
    }
    tracing::debug!("Decoded {} as {} ({} bytes)", path.display(), used.name(), bytes.len());
    Ok(decoded.into_owned())
}

/// Encode `text` as UTF-16LE with a BOM, the layout planner exports use.
#[cfg(test)]
pub fn utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xff, 0xfe];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}
