//! Loader error helpers
//!
//! Re-exports cardlist-error and maps decoder failures onto its kinds.

pub use cardlist_error::{Error, ErrorKind, Result};

use serde_json::error::Category;

/// Create a FileNotFound error for a path that exists but is not a regular file
pub fn not_a_file(path: impl Into<String>) -> Error {
    let path = path.into();
    Error::new(ErrorKind::FileNotFound, format!("'{}' is not a regular file", path))
        .with_context("path", path)
}

/// Map a serde_json decode failure.
///
/// Syntax, EOF and shape mismatches are all `DataFormat`; only a failure
/// of the underlying reader is `IoFailed`.
pub fn decode_failed(err: serde_json::Error) -> Error {
    let kind = match err.classify() {
        Category::Io => ErrorKind::IoFailed,
        Category::Syntax | Category::Data | Category::Eof => ErrorKind::DataFormat,
    };
    Error::new(kind, err.to_string())
        .with_operation("loader::decode")
        .with_context("line", err.line().to_string())
        .with_context("column", err.column().to_string())
        .set_source(err)
}

/// Map a serde_json encode failure
pub fn encode_failed(err: serde_json::Error) -> Error {
    Error::serialization_failed(err.to_string())
        .with_operation("loader::encode")
        .set_source(err)
}
