//! Seed records loaded into the actors at startup.
//!
//! The bundled fixtures live in `fixtures/` and are compiled into the binary. Every restart
//! begins from them again; nothing written at runtime is kept.

use crate::model::{InventoryItem, Request, User};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

const ITEMS_JSON: &str = include_str!("../fixtures/items.json");
const REQUESTS_JSON: &str = include_str!("../fixtures/requests.json");
const USERS_JSON: &str = include_str!("../fixtures/users.json");

#[derive(Debug, Error)]
#[error("Failed to parse {document} seed: {source}")]
pub struct SeedError {
    pub document: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Initial contents of the three collections, in fixture order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedData {
    pub items: Vec<InventoryItem>,
    pub requests: Vec<Request>,
    pub users: Vec<User>,
}

fn parse<T: DeserializeOwned>(document: &'static str, json: &str) -> Result<Vec<T>, SeedError> {
    let records: Vec<T> =
        serde_json::from_str(json).map_err(|source| SeedError { document, source })?;
    debug!(document, count = records.len(), "Parsed seed");
    Ok(records)
}

impl SeedData {
    /// Parses the three JSON arrays.
    pub fn from_json(items: &str, requests: &str, users: &str) -> Result<Self, SeedError> {
        Ok(Self {
            items: parse("items", items)?,
            requests: parse("requests", requests)?,
            users: parse("users", users)?,
        })
    }

    /// The fixtures bundled with the crate.
    pub fn bundled() -> Result<Self, SeedError> {
        Self::from_json(ITEMS_JSON, REQUESTS_JSON, USERS_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    #[test]
    fn bundled_fixtures_parse() {
        let seed = SeedData::bundled().unwrap();
        let first = &seed.items[0];
        assert_eq!(first.id, ItemId(1));
        assert_eq!((first.quantity, first.min_stock), (5, 10));
        assert!(seed.items.iter().any(|item| item.quantity == 0));
        assert!(!seed.requests.is_empty());
        assert!(!seed.users.is_empty());
    }

    #[test]
    fn requests_reference_seeded_items() {
        let seed = SeedData::bundled().unwrap();
        for request in &seed.requests {
            assert!(
                seed.items.iter().any(|item| item.id == request.item_id),
                "{} references missing {}",
                request.id,
                request.item_id
            );
        }
    }

    #[test]
    fn malformed_document_names_itself() {
        let err = SeedData::from_json("[]", "{not json", "[]").unwrap_err();
        assert_eq!(err.document, "requests");
        assert!(err.to_string().starts_with("Failed to parse requests seed"));
    }
}
