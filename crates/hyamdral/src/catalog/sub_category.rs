// Hyamdral
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

use hyamdral_common::error::Result;
use hyamdral_store::{ContentStore, collection, paths};
use serde::{Deserialize, Serialize};

use crate::data::Status;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    #[serde(skip_serializing, default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: String,
    #[serde(default)]
    pub status: Status,
}

pub async fn create(sub: &SubCategory, store: &ContentStore) -> Result<String> {
    let key = store
        .push(paths::CATEGORIES_SUB, serde_json::to_value(sub)?)
        .await?;
    Ok(key)
}

pub async fn save(id: &str, sub: &SubCategory, store: &ContentStore) -> Result<()> {
    let path = paths::child(paths::CATEGORIES_SUB, id);
    store.set(&path, serde_json::to_value(sub)?).await?;
    Ok(())
}

pub async fn list(store: &ContentStore) -> Result<Vec<SubCategory>> {
    let node = store.snapshot(paths::CATEGORIES_SUB).await?;
    Ok(collection::normalize(node.as_ref()))
}

pub async fn delete_by_id(id: &str, store: &ContentStore) -> Result<()> {
    store.remove(&paths::child(paths::CATEGORIES_SUB, id)).await?;
    Ok(())
}

/// Subcategories of one parent category, by exact `parentId` match.
pub fn by_parent<'a>(subs: &'a [SubCategory], parent_id: &str) -> Vec<&'a SubCategory> {
    subs.iter().filter(|sub| sub.parent_id == parent_id).collect()
}

/// Resolved name of a subcategory reference; the raw id when nothing
/// matches.
pub fn display_name<'a>(subs: &'a [SubCategory], id: &'a str) -> &'a str {
    subs.iter()
        .find(|sub| sub.id == id)
        .map_or(id, |sub| sub.name.as_str())
}
