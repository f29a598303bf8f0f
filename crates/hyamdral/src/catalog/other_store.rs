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

use crate::data::lenient_i64;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: String,
}

/// Directory store: everything below the showcased tier, including its
/// physical branch list and a best-seller teaser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherStore {
    #[serde(skip_serializing, default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub site_link: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub deals_count: i64,
    #[serde(default)]
    pub best_seller_image: String,
    #[serde(default)]
    pub best_seller_link: String,
    #[serde(default)]
    pub branches: Vec<Branch>,
}

impl OtherStore {
    pub fn add_branch(&mut self, branch: Branch) {
        self.branches.push(branch);
    }

    pub fn remove_branch(&mut self, index: usize) {
        if index < self.branches.len() {
            self.branches.remove(index);
        }
    }
}

pub async fn create(other: &OtherStore, store: &ContentStore) -> Result<String> {
    let key = store
        .push(paths::STORES_OTHERS, serde_json::to_value(other)?)
        .await?;
    Ok(key)
}

pub async fn save(id: &str, other: &OtherStore, store: &ContentStore) -> Result<()> {
    let path = paths::child(paths::STORES_OTHERS, id);
    store.set(&path, serde_json::to_value(other)?).await?;
    Ok(())
}

pub async fn list(store: &ContentStore) -> Result<Vec<OtherStore>> {
    let node = store.snapshot(paths::STORES_OTHERS).await?;
    Ok(collection::normalize(node.as_ref()))
}

pub async fn delete_by_id(id: &str, store: &ContentStore) -> Result<()> {
    store
        .remove(&paths::child(paths::STORES_OTHERS, id))
        .await?;
    Ok(())
}
