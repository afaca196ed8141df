//! The main Error type for cardlist

use crate::ErrorKind;
use std::fmt;

/// The unified error type for all cardlist operations.
///
/// This error type provides:
/// - `kind`: What type of error occurred
/// - `message`: Human-readable description
/// - `operation`: What operation caused the error
/// - `context`: Key-value pairs for debugging
/// - `source`: The underlying error (if any)
///
/// # Example
///
/// ```rust
/// use cardlist_error::{Error, ErrorKind};
///
/// let err = Error::new(ErrorKind::DataFormat, "invalid odds 'abc'")
///     .with_operation("loader::load")
///     .with_context("path", "base.json")
///     .with_context("line", "7");
///
/// assert_eq!(err.kind(), ErrorKind::DataFormat);
/// assert_eq!(err.context().len(), 2);
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Look up a single context value by key
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get the source error (if any)
    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }

    // =========================================================================
    // Builders (chainable)
    // =========================================================================

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }
}

// =============================================================================
// Display - compact, single-line format for logs
// =============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at {}", self.kind, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| &**e as &(dyn std::error::Error + 'static))
    }
}

// =============================================================================
// Convenient From implementations (be careful not to leak raw errors!)
// =============================================================================

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            // Unreadable counts as not found: the caller cannot tell them apart.
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                ErrorKind::FileNotFound
            }
            // read_to_string reports non-UTF-8 content this way
            std::io::ErrorKind::InvalidData => ErrorKind::DataFormat,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

// =============================================================================
// Convenience constructors
// =============================================================================

impl Error {
    /// Create a SerializationFailed error
    pub fn serialization_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationFailed, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::DataFormat, "expected value at line 1 column 2");
        assert_eq!(err.kind(), ErrorKind::DataFormat);
        assert_eq!(err.message(), "expected value at line 1 column 2");
        assert!(err.operation().is_empty());
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::DataFormat, "missing field `cards`")
            .with_operation("loader::load")
            .with_context("path", "base.json")
            .with_context("line", "3");

        assert_eq!(err.operation(), "loader::load");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("path", "base.json".to_string()));
        assert_eq!(err.context_value("line"), Some("3"));
        assert_eq!(err.context_value("column"), None);
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::IoFailed, "read failed")
            .with_operation("io")
            .with_operation("loader::load");

        assert_eq!(err.operation(), "loader::load");
        assert_eq!(err.context().len(), 1);
        assert_eq!(err.context()[0], ("called", "io".to_string()));
    }

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::DataFormat, "invalid odds 'abc'")
            .with_operation("loader::load")
            .with_context("path", "base.json");

        let display = format!("{}", err);
        assert_eq!(
            display,
            "DataFormat at loader::load, context { path: base.json } => invalid odds 'abc'"
        );
    }

    #[test]
    fn test_display_without_operation() {
        let err = Error::new(ErrorKind::IoFailed, "interrupted");
        assert_eq!(err.to_string(), "IoFailed => interrupted");
    }

    #[test]
    fn test_convenience_constructors() {
        let err = Error::serialization_failed("map key must be a string");
        assert_eq!(err.kind(), ErrorKind::SerializationFailed);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::from(io_err);
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.operation(), "io");
        assert!(err.source_ref().is_some());

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(Error::from(io_err).kind(), ErrorKind::FileNotFound);

        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        assert_eq!(Error::from(io_err).kind(), ErrorKind::DataFormat);

        let io_err = std::io::Error::new(std::io::ErrorKind::Interrupted, "interrupted");
        assert_eq!(Error::from(io_err).kind(), ErrorKind::IoFailed);
    }

    #[test]
    fn test_set_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not valid json").unwrap_err();
        let err = Error::new(ErrorKind::DataFormat, json_err.to_string()).set_source(json_err);

        assert!(err.source_ref().is_some());
        assert!(std::error::Error::source(&err).is_some());
    }
}
