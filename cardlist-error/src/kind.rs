//! Error kinds for cardlist operations

use std::fmt;

/// The kind of error that occurred.
///
/// Callers match on ErrorKind to decide what to report; the CLI prints
/// the kind verbatim in its diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // IO errors
    // =========================================================================
    /// Path does not exist or is not readable as a regular file
    FileNotFound,

    /// IO operation failed for some other reason
    IoFailed,

    // =========================================================================
    // Document errors
    // =========================================================================
    /// Content is not valid JSON, or does not match the card list shape
    DataFormat,

    /// Encoding a value for display failed
    SerializationFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            // IO
            ErrorKind::FileNotFound => "FileNotFound",
            ErrorKind::IoFailed => "IoFailed",

            // Document
            ErrorKind::DataFormat => "DataFormat",
            ErrorKind::SerializationFailed => "SerializationFailed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
