//! Insert odds ratios such as `1:24` or `1:24,48`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static ODDS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+:[0-9,]+$").expect("odds pattern is a valid regex")
});

/// A pull ratio: one numerator against one or more comma-separated
/// denominators (`1:24,48` reads "one in 24 hobby, one in 48 retail").
///
/// Only strings matching `^[0-9]+:[0-9,]+$` construct an `Odds`; the
/// original text is kept verbatim so re-encoding reproduces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Odds(String);

impl Odds {
    pub fn parse(text: impl Into<String>) -> Result<Self, InvalidOdds> {
        let text = text.into();
        if ODDS_PATTERN.is_match(&text) {
            Ok(Self(text))
        } else {
            Err(InvalidOdds(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Left side of the ratio, `None` if it overflows a u64
    pub fn numerator(&self) -> Option<u64> {
        self.0.split_once(':').and_then(|(n, _)| n.parse().ok())
    }

    /// Right side of the ratio; empty segments (`1:24,`) are skipped
    pub fn denominators(&self) -> Vec<u64> {
        self.0
            .split_once(':')
            .map(|(_, d)| {
                d.split(',')
                    .filter(|s| !s.is_empty())
                    .filter_map(|s| s.parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl TryFrom<String> for Odds {
    type Error = InvalidOdds;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Odds::parse(value)
    }
}

impl From<Odds> for String {
    fn from(odds: Odds) -> Self {
        odds.0
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejected odds text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOdds(pub String);

impl fmt::Display for InvalidOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid odds '{}', expected <numerator>:<denominators> such as 1:24,48",
            self.0
        )
    }
}

impl std::error::Error for InvalidOdds {}
