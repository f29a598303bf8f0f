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

/// Decorative hero overlay for one main category. `categoryId` is a loose
/// reference: nothing prevents a panel pointing at a category that no
/// longer exists, and the storefront falls back gracefully when a category
/// has no panel at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPanel {
    #[serde(skip_serializing, default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: String,
}

pub async fn create(panel: &CategoryPanel, store: &ContentStore) -> Result<String> {
    let key = store
        .push(paths::CATEGORIES_PANEL, serde_json::to_value(panel)?)
        .await?;
    Ok(key)
}

pub async fn save(id: &str, panel: &CategoryPanel, store: &ContentStore) -> Result<()> {
    let path = paths::child(paths::CATEGORIES_PANEL, id);
    store.set(&path, serde_json::to_value(panel)?).await?;
    Ok(())
}

pub async fn list(store: &ContentStore) -> Result<Vec<CategoryPanel>> {
    let node = store.snapshot(paths::CATEGORIES_PANEL).await?;
    Ok(collection::normalize(node.as_ref()))
}

pub async fn delete_by_id(id: &str, store: &ContentStore) -> Result<()> {
    store
        .remove(&paths::child(paths::CATEGORIES_PANEL, id))
        .await?;
    Ok(())
}

pub fn for_category<'a>(panels: &'a [CategoryPanel], category_id: &str) -> Option<&'a CategoryPanel> {
    panels.iter().find(|panel| panel.category_id == category_id)
}
