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

use crate::data::{IconTag, Status};

/// Top-level catalog category. The key is a semantic uppercase code
/// (`TECH`, `FASHION`) chosen at creation and immutable afterwards:
/// saves address the record by that code and never move it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainCategory {
    #[serde(skip_serializing, default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: IconTag,
    #[serde(default)]
    pub status: Status,
}

pub async fn upsert(id: &str, category: &MainCategory, store: &ContentStore) -> Result<()> {
    let path = paths::child(paths::CATEGORIES_MAIN, id);
    store.set(&path, serde_json::to_value(category)?).await?;
    Ok(())
}

pub async fn list(store: &ContentStore) -> Result<Vec<MainCategory>> {
    let node = store.snapshot(paths::CATEGORIES_MAIN).await?;
    Ok(collection::normalize(node.as_ref()))
}

pub async fn get(id: &str, store: &ContentStore) -> Result<Option<MainCategory>> {
    let node = store
        .snapshot(&paths::child(paths::CATEGORIES_MAIN, id))
        .await?;
    Ok(node.and_then(|value| collection::record(id, value)))
}

pub async fn delete_by_id(id: &str, store: &ContentStore) -> Result<()> {
    store
        .remove(&paths::child(paths::CATEGORIES_MAIN, id))
        .await?;
    Ok(())
}

/// Display name for a category reference. Unresolved ids render as the raw
/// id rather than failing — a product may point at a category that was
/// deleted or has not streamed in yet.
pub fn display_name<'a>(categories: &'a [MainCategory], id: &'a str) -> &'a str {
    categories
        .iter()
        .find(|category| category.id == id)
        .map_or(id, |category| category.name.as_str())
}
