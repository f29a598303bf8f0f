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

/// Countdown sale block on the home page. `endDate` is the editor-typed
/// `datetime-local` string; `discountPercent` is derived from the price
/// pair on save, same as a product's discount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashSale {
    #[serde(skip_serializing, default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bg_image: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_image: String,
    #[serde(default)]
    pub old_price: String,
    #[serde(default)]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub discount_percent: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub stock: i64,
    #[serde(default)]
    pub link: String,
}

pub async fn create(sale: &FlashSale, store: &ContentStore) -> Result<String> {
    let key = store
        .push(paths::HOME_FLASH_SALES, serde_json::to_value(sale)?)
        .await?;
    Ok(key)
}

pub async fn save(id: &str, sale: &FlashSale, store: &ContentStore) -> Result<()> {
    let path = paths::child(paths::HOME_FLASH_SALES, id);
    store.set(&path, serde_json::to_value(sale)?).await?;
    Ok(())
}

pub async fn list(store: &ContentStore) -> Result<Vec<FlashSale>> {
    let node = store.snapshot(paths::HOME_FLASH_SALES).await?;
    Ok(collection::normalize(node.as_ref()))
}

pub async fn delete_by_id(id: &str, store: &ContentStore) -> Result<()> {
    store
        .remove(&paths::child(paths::HOME_FLASH_SALES, id))
        .await?;
    Ok(())
}
