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
use serde_json::json;

/// Rotating promo banner on the featured page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedPanelBanner {
    #[serde(skip_serializing, default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub button_text: String,
    #[serde(default)]
    pub bg_image: String,
    #[serde(default)]
    pub is_active: bool,
}

pub async fn create(banner: &FeaturedPanelBanner, store: &ContentStore) -> Result<String> {
    let key = store
        .push(paths::FEATURED_PANEL, serde_json::to_value(banner)?)
        .await?;
    Ok(key)
}

pub async fn save(id: &str, banner: &FeaturedPanelBanner, store: &ContentStore) -> Result<()> {
    let path = paths::child(paths::FEATURED_PANEL, id);
    store.set(&path, serde_json::to_value(banner)?).await?;
    Ok(())
}

pub async fn list(store: &ContentStore) -> Result<Vec<FeaturedPanelBanner>> {
    let node = store.snapshot(paths::FEATURED_PANEL).await?;
    Ok(collection::normalize(node.as_ref()))
}

pub async fn delete_by_id(id: &str, store: &ContentStore) -> Result<()> {
    store
        .remove(&paths::child(paths::FEATURED_PANEL, id))
        .await?;
    Ok(())
}

/// Single-field visibility toggle, same shape as the hero slides.
pub async fn set_active(id: &str, active: bool, store: &ContentStore) -> Result<()> {
    let field = format!("{}/{id}/isActive", paths::FEATURED_PANEL);
    store.set(&field, json!(active)).await?;
    Ok(())
}
