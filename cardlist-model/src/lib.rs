//! # cardlist-model
//!
//! Typed model of a trading-card catalog document and its JSON loader.
//!
//! ## Core Concepts
//! - **CardList**: the root document, ordered sets of ordered cards
//! - **Parallels / Variations**: alternate versions hanging off sets and cards
//! - **Odds**: validated pull ratios such as `1:24,48`
//! - **Loader**: one-shot read + decode, with errors as `FileNotFound` or `DataFormat`
//! - **Audit**: optional attribute cross-reference checks

pub mod audit;
pub mod error;
pub mod loader;
pub mod odds;
pub mod schema;

pub use audit::{check_attributes, AttributeFinding, AttributeReport};
pub use error::{Error, ErrorKind, Result};
pub use loader::{encode, load, parse_str};
pub use odds::{InvalidOdds, Odds};
pub use schema::{AttributeItem, Card, CardList, InsertOdd, Parallel, Set, Variation};
