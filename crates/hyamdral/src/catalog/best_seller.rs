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
#[serde(rename_all = "camelCase")]
pub struct BestSellerItem {
    #[serde(skip_serializing, default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub sold_count: i64,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub store_logo: String,
}

pub async fn create(item: &BestSellerItem, store: &ContentStore) -> Result<String> {
    let key = store
        .push(paths::HOME_BEST_SELLERS, serde_json::to_value(item)?)
        .await?;
    Ok(key)
}

pub async fn save(id: &str, item: &BestSellerItem, store: &ContentStore) -> Result<()> {
    let path = paths::child(paths::HOME_BEST_SELLERS, id);
    store.set(&path, serde_json::to_value(item)?).await?;
    Ok(())
}

pub async fn list(store: &ContentStore) -> Result<Vec<BestSellerItem>> {
    let node = store.snapshot(paths::HOME_BEST_SELLERS).await?;
    Ok(collection::normalize(node.as_ref()))
}

pub async fn delete_by_id(id: &str, store: &ContentStore) -> Result<()> {
    store
        .remove(&paths::child(paths::HOME_BEST_SELLERS, id))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sold_counts_survive_string_form_input() {
        let store = ContentStore::new();
        let key = create(
            &BestSellerItem {
                name: "Airpods Pro".to_owned(),
                price: "450,000₮".to_owned(),
                sold_count: 340,
                ..Default::default()
            },
            &store,
        )
        .await
        .unwrap();

        // Legacy rows stored the count as typed into the number input.
        store
            .set(
                "content/home/bestSellers/legacy",
                serde_json::json!({"name": "Хуучин", "soldCount": "120"}),
            )
            .await
            .unwrap();

        let listed = list(&store).await.unwrap();
        assert_eq!(listed[0].id, key);
        assert_eq!(listed[0].sold_count, 340);
        assert_eq!(listed[1].sold_count, 120);
    }
}
