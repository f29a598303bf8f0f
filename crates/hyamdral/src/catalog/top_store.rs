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

/// Showcased partner store with cover art, rendered in the auto-scrolling
/// strip at the top of the stores directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStore {
    #[serde(skip_serializing, default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub cover_image: String,
}

pub async fn create(top: &TopStore, store: &ContentStore) -> Result<String> {
    let key = store
        .push(paths::STORES_TOP, serde_json::to_value(top)?)
        .await?;
    Ok(key)
}

pub async fn save(id: &str, top: &TopStore, store: &ContentStore) -> Result<()> {
    let path = paths::child(paths::STORES_TOP, id);
    store.set(&path, serde_json::to_value(top)?).await?;
    Ok(())
}

pub async fn list(store: &ContentStore) -> Result<Vec<TopStore>> {
    let node = store.snapshot(paths::STORES_TOP).await?;
    Ok(collection::normalize(node.as_ref()))
}

pub async fn delete_by_id(id: &str, store: &ContentStore) -> Result<()> {
    store.remove(&paths::child(paths::STORES_TOP, id)).await?;
    Ok(())
}
