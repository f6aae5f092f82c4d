//! The document payload handed to the analysis pipeline.
//!
//! A [`Document`] is nothing more than the raw PDF bytes plus a display name.
//! It is immutable once constructed, and every task invocation copies the full
//! payload into the outgoing request — there is no caching, chunking, or
//! extraction step between the file and the model. Repeated calls on the same
//! document therefore always send identical bytes.
//!
//! Constructors validate the `%PDF` magic prefix up front so callers get a
//! meaningful error instead of an opaque service-side rejection.

use crate::error::DocLensError;
use std::path::Path;

/// Raw PDF payload plus display name.
///
/// The display name is sanitized later, at request-assembly time; the value
/// stored here is whatever the caller supplied (e.g. the uploaded filename).
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    bytes: Vec<u8>,
}

impl Document {
    /// The only document format this pipeline sends.
    pub const FORMAT: &'static str = "pdf";

    /// Build a document from in-memory bytes.
    ///
    /// This is the right constructor when the PDF arrives from an upload,
    /// a database, or a network stream. Validates the `%PDF` magic bytes.
    pub fn from_bytes(bytes: Vec<u8>, name: impl Into<String>) -> Result<Self, DocLensError> {
        let name = name.into();
        if !starts_with_pdf_magic(&bytes) {
            return Err(DocLensError::NotAPdf {
                name,
                magic: leading_bytes(&bytes),
            });
        }
        Ok(Self { name, bytes })
    }

    /// Read a document from a local file.
    ///
    /// The display name is taken from the file name component of `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocLensError> {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(DocLensError::PermissionDenied {
                    path: path.to_path_buf(),
                });
            }
            Err(_) => {
                return Err(DocLensError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());

        Self::from_bytes(bytes, name)
    }

    /// The caller-supplied display name (unsanitized).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full PDF payload.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn starts_with_pdf_magic(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && &bytes[..4] == b"%PDF"
}

/// First four bytes, zero-padded, for the error message.
fn leading_bytes(bytes: &[u8]) -> [u8; 4] {
    let mut magic = [0u8; 4];
    for (slot, b) in magic.iter_mut().zip(bytes.iter()) {
        *slot = *b;
    }
    magic
}
