//! # Card List Schema
//!
//! Typed mirror of a card catalog document. A `CardList` holds ordered
//! `Set`s, each holding ordered `Card`s; parallels, variations and
//! insert odds hang off sets, cards and variations.
//!
//! ## Wire names
//! Each field whose JSON key differs from its Rust name carries its own
//! `rename`. The legacy key `of` is accepted for `numberedTo` on
//! parallels; legacy flat variations decode with their nested fields
//! absent.
//!
//! Optional sequences are `Option<Vec<_>>` so an absent key and an empty
//! array stay distinguishable on re-encode.

use crate::odds::Odds;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Root of a card catalog document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardList {
    /// JSON schema URL the document declares
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Release name, e.g. "2024 Topps Series 1"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "uniqueId", skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    /// Catalog-wide attribute codes referenced by cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeItem>>,
    /// Sets in checklist order
    pub sets: Vec<Set>,
}

impl CardList {
    /// Total cards across all sets
    pub fn card_count(&self) -> usize {
        self.sets.iter().map(|s| s.cards.len()).sum()
    }
}

/// A short attribute code (`RC`, `SP`, ...) and what it means
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeItem {
    pub attribute: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A named group of cards issued together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    pub name: String,
    #[serde(rename = "uniqueId", skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    /// Print run, when the whole set is serial numbered
    #[serde(rename = "numberedTo", skip_serializing_if = "Option::is_none")]
    pub numbered_to: Option<NonZeroU32>,
    #[serde(rename = "insertOdds", skip_serializing_if = "Option::is_none")]
    pub insert_odds: Option<Vec<InsertOdd>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<Variation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallels: Option<Vec<Parallel>>,
    /// Cards in checklist order
    pub cards: Vec<Card>,
}

/// Odds of pulling an item from one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertOdd {
    pub product: String,
    pub odds: Odds,
}

/// An alternate rendering that is not branded as a parallel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub variation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "insertOdds", skip_serializing_if = "Option::is_none")]
    pub insert_odds: Option<Vec<InsertOdd>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallels: Option<Vec<Parallel>>,
}

/// A branded alternate version, often serial numbered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parallel {
    pub name: String,
    #[serde(rename = "numberedTo", alias = "of", skip_serializing_if = "Option::is_none")]
    pub numbered_to: Option<NonZeroU32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(rename = "insertOdds", skip_serializing_if = "Option::is_none")]
    pub insert_odds: Option<Vec<InsertOdd>>,
}

/// One checklist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "uniqueId", skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    /// Checklist number; may carry a prefix such as "US175" or "RC-12"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub name: String,
    /// Codes into `CardList::attributes`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<Variation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallels: Option<Vec<Parallel>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_document() {
        let list: CardList = serde_json::from_value(json!({"sets": []})).unwrap();
        assert!(list.sets.is_empty());
        assert_eq!(list.name, None);
        assert_eq!(list.notes, None);
        assert_eq!(list.attributes, None);
        assert_eq!(list.card_count(), 0);
    }

    #[test]
    fn test_single_card() {
        let list: CardList = serde_json::from_value(json!({
            "sets": [{"name": "Base", "cards": [{"name": "Mike Trout", "number": "27"}]}]
        }))
        .unwrap();

        let card = &list.sets[0].cards[0];
        assert_eq!(card.name, "Mike Trout");
        assert_eq!(card.number.as_deref(), Some("27"));
        assert_eq!(card.unique_id, None);
        assert_eq!(card.attributes, None);
        assert_eq!(card.note, None);
        assert_eq!(card.variations, None);
        assert_eq!(card.parallels, None);
    }

    #[test]
    fn test_required_fields() {
        // no sets
        assert!(serde_json::from_value::<CardList>(json!({"name": "x"})).is_err());
        // set without cards
        assert!(serde_json::from_value::<CardList>(json!({"sets": [{"name": "Base"}]})).is_err());
        // set without name
        assert!(serde_json::from_value::<CardList>(json!({"sets": [{"cards": []}]})).is_err());
        // card without name
        assert!(serde_json::from_value::<CardList>(json!({
            "sets": [{"name": "Base", "cards": [{"number": "1"}]}]
        }))
        .is_err());
        // attribute without code
        assert!(serde_json::from_value::<CardList>(json!({
            "attributes": [{"note": "Rookie"}],
            "sets": []
        }))
        .is_err());
    }

    #[test]
    fn test_nested_parallels_and_odds() {
        let set: Set = serde_json::from_value(json!({
            "name": "Stars of MLB",
            "numberedTo": 299,
            "insertOdds": [{"product": "Hobby", "odds": "1:24,48"}],
            "variations": [{
                "variation": "Image Variation",
                "insertOdds": [{"product": "Hobby", "odds": "1:1,024"}],
                "parallels": [{"name": "Gold", "numberedTo": 50}]
            }],
            "cards": []
        }))
        .unwrap();

        assert_eq!(set.numbered_to.map(|n| n.get()), Some(299));
        let odds = &set.insert_odds.as_ref().unwrap()[0].odds;
        assert_eq!(odds.denominators(), vec![24, 48]);

        let variation = &set.variations.as_ref().unwrap()[0];
        let parallel = &variation.parallels.as_ref().unwrap()[0];
        assert_eq!(parallel.name, "Gold");
        assert_eq!(parallel.numbered_to.map(|n| n.get()), Some(50));
    }

    #[test]
    fn test_legacy_shape() {
        let card: Card = serde_json::from_value(json!({
            "name": "Shohei Ohtani",
            "variations": [{"variation": "Photo", "note": "Batting"}],
            "parallels": [{"name": "Red", "of": 5, "notes": []}]
        }))
        .unwrap();

        let variation = &card.variations.as_ref().unwrap()[0];
        assert_eq!(variation.insert_odds, None);
        assert_eq!(variation.parallels, None);

        let parallel = &card.parallels.as_ref().unwrap()[0];
        assert_eq!(parallel.numbered_to.map(|n| n.get()), Some(5));
        // re-encodes under the current name
        let out = serde_json::to_value(parallel).unwrap();
        assert_eq!(out, json!({"name": "Red", "numberedTo": 5, "notes": []}));
    }

    #[test]
    fn test_numbered_to_rejects_zero_and_strings() {
        assert!(serde_json::from_value::<Parallel>(json!({"name": "Gold", "numberedTo": 0})).is_err());
        assert!(serde_json::from_value::<Parallel>(json!({"name": "Gold", "numberedTo": "50"})).is_err());
        assert!(serde_json::from_value::<Parallel>(json!({"name": "Gold", "numberedTo": -1})).is_err());
    }

    #[test]
    fn test_serialize_field_order_and_wire_names() {
        let list: CardList = serde_json::from_value(json!({
            "sets": [{"cards": [], "name": "Base", "uniqueId": "s-1"}],
            "name": "2024 Topps",
            "$schema": "https://example.com/card-list.json"
        }))
        .unwrap();

        let text = serde_json::to_string(&list).unwrap();
        assert_eq!(
            text,
            r#"{"$schema":"https://example.com/card-list.json","name":"2024 Topps","sets":[{"name":"Base","uniqueId":"s-1","cards":[]}]}"#
        );
    }

    #[test]
    fn test_absent_and_empty_sequences_stay_distinct() {
        let set: Set = serde_json::from_value(json!({"name": "Base", "notes": [], "cards": []})).unwrap();
        assert_eq!(set.notes, Some(vec![]));
        assert_eq!(set.parallels, None);

        let out = serde_json::to_value(&set).unwrap();
        assert_eq!(out, json!({"name": "Base", "notes": [], "cards": []}));
    }
}
