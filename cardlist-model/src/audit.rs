//! Attribute cross-reference checks for a single card list.
//!
//! Cards name attributes by code; the codes are defined once at the
//! root. Decoding never enforces that link, this module reports where
//! it is broken.

use crate::schema::CardList;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// One broken link between card attributes and root definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeFinding {
    /// Used on a card but never defined at the root
    Undefined {
        attribute: String,
        set: String,
        card: String,
    },
    /// Defined at the root but never used on a card
    Unused { attribute: String },
    /// Defined more than once at the root with different notes
    Conflicting { attribute: String, notes: Vec<String> },
}

impl fmt::Display for AttributeFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeFinding::Undefined { attribute, set, card } => write!(
                f,
                "attribute '{}' on card '{}' in set '{}' is not defined in root attributes",
                attribute, card, set
            ),
            AttributeFinding::Unused { attribute } => write!(
                f,
                "attribute '{}' is defined in root attributes but not used on any card",
                attribute
            ),
            AttributeFinding::Conflicting { attribute, notes } => write!(
                f,
                "attribute '{}' is defined with conflicting notes: {}",
                attribute,
                notes
                    .iter()
                    .map(|n| format!("'{}'", n))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

/// Findings in document order: undefined first, then unused, then conflicts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeReport {
    pub findings: Vec<AttributeFinding>,
}

impl AttributeReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Check that every card attribute is defined at the root and every root
/// attribute is used, and that no code is defined twice with different notes.
pub fn check_attributes(list: &CardList) -> AttributeReport {
    let definitions = list.attributes.as_deref().unwrap_or_default();

    // code -> distinct notes in definition order; a note-less entry still
    // defines the code but contributes no note
    let mut defined: Vec<(&str, Vec<&str>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for item in definitions {
        let i = *index.entry(item.attribute.as_str()).or_insert_with(|| {
            defined.push((item.attribute.as_str(), Vec::new()));
            defined.len() - 1
        });
        if let Some(note) = item.note.as_deref() {
            if !defined[i].1.contains(&note) {
                defined[i].1.push(note);
            }
        }
    }

    let mut findings = Vec::new();
    let mut used: HashSet<&str> = HashSet::new();
    for set in &list.sets {
        for card in &set.cards {
            for code in card.attributes.iter().flatten() {
                if used.insert(code.as_str()) && !index.contains_key(code.as_str()) {
                    findings.push(AttributeFinding::Undefined {
                        attribute: code.clone(),
                        set: set.name.clone(),
                        card: card_label(card.number.as_deref(), &card.name),
                    });
                }
            }
        }
    }

    for (code, _) in &defined {
        if !used.contains(code) {
            findings.push(AttributeFinding::Unused {
                attribute: code.to_string(),
            });
        }
    }

    for (code, notes) in &defined {
        if notes.len() > 1 {
            findings.push(AttributeFinding::Conflicting {
                attribute: code.to_string(),
                notes: notes.iter().map(|n| n.to_string()).collect(),
            });
        }
    }

    AttributeReport { findings }
}

fn card_label(number: Option<&str>, name: &str) -> String {
    match number {
        Some(number) => format!("{} {}", number, name),
        None => name.to_string(),
    }
}
