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

//! Operations on the raw JSON document tree. Empty objects are pruned so
//! that a node with no children reads back as absent, and writing `null`
//! is equivalent to removal.

use serde_json::{Map, Value};

pub(crate) fn get<'a>(root: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    let mut node = root;
    for segment in segments {
        node = node.as_object()?.get(*segment)?;
    }
    Some(node)
}

pub(crate) fn set(root: &mut Value, segments: &[&str], value: Value) {
    if value.is_null() {
        remove(root, segments);
        return;
    }
    let (last, parents) = segments.split_last().expect("validated non-empty path");
    let mut node = root;
    for segment in parents {
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        node = node
            .as_object_mut()
            .expect("just coerced to object")
            .entry((*segment).to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    node.as_object_mut()
        .expect("just coerced to object")
        .insert((*last).to_owned(), value);
}

pub(crate) fn remove(root: &mut Value, segments: &[&str]) {
    remove_inner(root, segments);
}

/// Returns true when the node at this level became empty and should be
/// dropped from its parent.
fn remove_inner(node: &mut Value, segments: &[&str]) -> bool {
    let Some(object) = node.as_object_mut() else {
        return false;
    };
    match segments {
        [] => false,
        [last] => {
            object.remove(*last);
            object.is_empty()
        }
        [first, rest @ ..] => {
            if let Some(child) = object.get_mut(*first) {
                if remove_inner(child, rest) {
                    object.remove(*first);
                }
            }
            object.is_empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_creates_intermediate_nodes() {
        let mut root = Value::Object(Map::new());
        set(&mut root, &["content", "home", "hero"], json!({"a": 1}));
        assert_eq!(
            get(&root, &["content", "home", "hero", "a"]),
            Some(&json!(1))
        );
    }

    #[test]
    fn remove_prunes_empty_parents() {
        let mut root = json!({"content": {"home": {"hero": {"a": 1}}}});
        remove(&mut root, &["content", "home", "hero", "a"]);
        assert_eq!(get(&root, &["content"]), None);
    }

    #[test]
    fn set_null_removes() {
        let mut root = json!({"content": {"general": {"siteName": "Hyamdral"}}});
        set(&mut root, &["content", "general"], Value::Null);
        assert_eq!(get(&root, &["content", "general"]), None);
    }
}
