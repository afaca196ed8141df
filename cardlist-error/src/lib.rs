//! # cardlist-error
//!
//! Unified error handling for the cardlist workspace.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., FileNotFound, DataFormat)
//! - **Error Context**: Assist in locating the cause (path, line, column)
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use cardlist_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::DataFormat, "missing field `cards`")
//!         .with_operation("loader::load")
//!         .with_context("path", "2024-topps.json")
//!         .with_context("line", "12"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All functions return `Result<T, cardlist_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Don't abuse `From<OtherError>` to prevent raw error leakage

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using cardlist Error
pub type Result<T> = std::result::Result<T, Error>;
