// hyamdral-store
// Copyright (C) 2025 Hyamdral.mn

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Turns a raw collection node (keyed map of records) into an ordered list
//! of typed records, injecting each record's storage key as its `id`.
//!
//! This is the single read path every list view goes through. It is a pure
//! transform: it is re-run on every subscription delivery and must produce
//! the same output for the same node.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Raw form: `(key, record)` pairs in the store's insertion order. An
/// absent or non-collection node yields an empty list, never an error.
pub fn records(node: Option<&Value>) -> Vec<(String, Value)> {
    match node.and_then(Value::as_object) {
        Some(children) => children
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        None => Vec::new(),
    }
}

/// Typed form: deserializes every child into `T` after injecting the key
/// as the record's `id` field. A child that is not a record, or that fails
/// to deserialize, is skipped with a warning; one malformed record never
/// poisons the whole collection.
pub fn normalize<T: DeserializeOwned>(node: Option<&Value>) -> Vec<T> {
    records(node)
        .into_iter()
        .filter_map(|(key, value)| record(&key, value))
        .collect()
}

/// Decodes one keyed record, injecting the key as its `id` field. Returns
/// `None` (with a warning) for anything that is not a decodable record.
pub fn record<T: DeserializeOwned>(key: &str, value: Value) -> Option<T> {
    let Value::Object(mut fields) = value else {
        warn!(key, "skipping non-record collection child");
        return None;
    };
    fields.insert("id".to_owned(), Value::String(key.to_owned()));
    match serde_json::from_value(Value::Object(fields)) {
        Ok(typed) => Some(typed),
        Err(error) => {
            warn!(key, %error, "skipping undecodable record");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Partner {
        #[serde(default)]
        id: String,
        name: String,
        #[serde(default)]
        link: String,
    }

    #[test]
    fn absent_node_is_an_empty_list() {
        assert!(records(None).is_empty());
        assert!(normalize::<Partner>(None).is_empty());
    }

    #[test]
    fn scalar_node_is_an_empty_list() {
        let node = json!("not a collection");
        assert!(normalize::<Partner>(Some(&node)).is_empty());
    }

    #[test]
    fn key_is_injected_as_id_and_fields_are_untouched() {
        let node = json!({
            "p1": {"name": "Shoppy", "link": "https://shoppy.mn"},
            "p2": {"name": "Emart"},
        });
        let partners = normalize::<Partner>(Some(&node));
        assert_eq!(partners.len(), 2);
        assert_eq!(partners[0].id, "p1");
        assert_eq!(partners[0].name, "Shoppy");
        assert_eq!(partners[0].link, "https://shoppy.mn");
        assert_eq!(partners[1].id, "p2");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let node = json!({
            "z": {"name": "last-key-first"},
            "a": {"name": "first-key-last"},
        });
        let partners = normalize::<Partner>(Some(&node));
        assert_eq!(partners[0].id, "z");
        assert_eq!(partners[1].id, "a");
    }

    #[test]
    fn malformed_children_are_skipped() {
        let node = json!({
            "ok": {"name": "Shoppy"},
            "bad": "just a string",
            "missing": {"link": "no name field"},
        });
        let partners = normalize::<Partner>(Some(&node));
        assert_eq!(partners.len(), 1);
        assert_eq!(partners[0].id, "ok");
    }
}
