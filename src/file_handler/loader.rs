//! Document loading
//!
//! Reads a PDF and extracts the metadata the viewer needs: page count,
//! declared title and whether the document has a searchable text layer.

use crate::error::{FileError, FileResult};
use crate::state::DocumentInfo;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Maximum document size allowed (256 MB)
pub const MAX_DOCUMENT_SIZE: u64 = 256 * 1024 * 1024;

/// File extensions offered by the open dialog
pub const DOCUMENT_EXTENSIONS: &[&str] = &["pdf"];

/// Load document metadata from disk
pub async fn load_document_info(path: impl AsRef<Path>) -> FileResult<DocumentInfo> {
    let path = path.as_ref().to_path_buf();

    if !path.exists() {
        return Err(FileError::NotFound(path));
    }

    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| FileError::ReadError {
            path: path.clone(),
            source: e,
        })?;

    if !metadata.is_file() {
        return Err(FileError::NotAFile { path });
    }

    if metadata.len() > MAX_DOCUMENT_SIZE {
        return Err(FileError::FileTooLarge {
            path,
            size: metadata.len(),
            max_size: MAX_DOCUMENT_SIZE,
        });
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| FileError::ReadError {
            path: path.clone(),
            source: e,
        })?;

    // lopdf parsing is CPU bound
    let join_path = path.clone();
    tokio::task::spawn_blocking(move || parse_document(path, &bytes))
        .await
        .map_err(|e| FileError::ReadError {
            path: join_path,
            source: std::io::Error::other(e.to_string()),
        })?
}

/// Parse document bytes into metadata
pub fn parse_document(path: PathBuf, bytes: &[u8]) -> FileResult<DocumentInfo> {
    if is_encrypted(bytes) {
        return Err(FileError::Encrypted { path });
    }

    let doc = match Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(source) => return Err(FileError::ParseError { path, source }),
    };

    let n_pages = doc.get_pages().len();
    if n_pages == 0 {
        return Err(FileError::NoPages { path });
    }

    let title = document_title(&doc);
    let supports_find = has_text_layer(bytes);

    log::debug!(
        "Parsed {}: {} pages, text layer: {}",
        path.display(),
        n_pages,
        supports_find
    );

    Ok(DocumentInfo {
        path,
        title,
        n_pages,
        supports_find,
    })
}

/// Whether the raw bytes declare an encryption dictionary
pub fn is_encrypted(bytes: &[u8]) -> bool {
    contains(bytes, b"/Encrypt")
}

/// Whether the document references any font, i.e. has text to search
pub fn has_text_layer(bytes: &[u8]) -> bool {
    contains(bytes, b"/Font")
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Title from the document information dictionary
fn document_title(doc: &Document) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let raw = doc
        .get_dictionary(info_id)
        .ok()?
        .get(b"Title")
        .ok()?
        .as_str()
        .ok()?;
    let title = decode_text_string(raw);
    if title.trim().is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Decode a PDF text string (UTF-16BE with BOM, otherwise treated as UTF-8)
fn decode_text_string(raw: &[u8]) -> String {
    match raw {
        [0xFE, 0xFF, rest @ ..] => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        _ => String::from_utf8_lossy(raw).to_string(),
    }
}

/// Whether a path has a supported document extension
pub fn is_document_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            DOCUMENT_EXTENSIONS
                .iter()
                .any(|ext| e.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
