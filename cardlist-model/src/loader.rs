//! # Card List Loader
//!
//! Reads one document from disk and decodes it into a `CardList`, and
//! encodes a `CardList` back to JSON for display. The file is read in
//! one call; its handle is closed before decoding starts.

use crate::error::{self, Error, Result};
use crate::schema::CardList;
use std::path::Path;
use tracing::debug;

const LOAD_OP: &str = "loader::load";

/// Load and decode the card list at `path`.
///
/// Errors:
/// - `FileNotFound`: missing, unreadable, or not a regular file
/// - `DataFormat`: not JSON, not UTF-8, or not a card list
/// - `IoFailed`: any other read failure
pub fn load(path: impl AsRef<Path>) -> Result<CardList> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let metadata = std::fs::metadata(path).map_err(|e| {
        Error::from(e)
            .with_operation(LOAD_OP)
            .with_context("path", path_str.clone())
    })?;
    if !metadata.is_file() {
        return Err(error::not_a_file(path_str).with_operation(LOAD_OP));
    }

    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::from(e)
            .with_operation(LOAD_OP)
            .with_context("path", path_str.clone())
    })?;
    debug!(path = %path_str, bytes = text.len(), "read card list");

    let list = parse_str(&text).map_err(|e| {
        e.with_operation(LOAD_OP).with_context("path", path_str.clone())
    })?;
    debug!(
        path = %path_str,
        sets = list.sets.len(),
        cards = list.card_count(),
        "decoded card list"
    );

    Ok(list)
}

/// Decode a card list from JSON text
pub fn parse_str(text: &str) -> Result<CardList> {
    serde_json::from_str(text).map_err(error::decode_failed)
}

/// Encode a card list as JSON, indented when `pretty` is set.
///
/// Keys come out in schema declaration order and absent optional
/// fields are omitted.
pub fn encode(list: &CardList, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(list)
    } else {
        serde_json::to_string(list)
    };
    out.map_err(error::encode_failed)
}
