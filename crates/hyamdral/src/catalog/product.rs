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

/// Regular catalog product, filed under a main category and optionally a
/// subcategory. Prices are currency-formatted strings as typed by the
/// editor; `discount` is derived from the price pair on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(skip_serializing, default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub store: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub original_price: String,
    #[serde(default)]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub discount: i64,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub description: String,
}

pub async fn create(product: &Product, store: &ContentStore) -> Result<String> {
    let key = store
        .push(paths::CATEGORIES_PRODUCTS, serde_json::to_value(product)?)
        .await?;
    Ok(key)
}

pub async fn save(id: &str, product: &Product, store: &ContentStore) -> Result<()> {
    let path = paths::child(paths::CATEGORIES_PRODUCTS, id);
    store.set(&path, serde_json::to_value(product)?).await?;
    Ok(())
}

pub async fn list(store: &ContentStore) -> Result<Vec<Product>> {
    let node = store.snapshot(paths::CATEGORIES_PRODUCTS).await?;
    Ok(collection::normalize(node.as_ref()))
}

pub async fn delete_by_id(id: &str, store: &ContentStore) -> Result<()> {
    store
        .remove(&paths::child(paths::CATEGORIES_PRODUCTS, id))
        .await?;
    Ok(())
}
