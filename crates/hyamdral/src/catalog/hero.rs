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

/// Home page hero slide. A slide must carry an image to be persisted;
/// toggling visibility writes only the `isActive` field so concurrent
/// edits to the rest of the slide are not clobbered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    #[serde(skip_serializing, default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub button_text: String,
    #[serde(default)]
    pub is_active: bool,
}

pub async fn create(slide: &HeroSlide, store: &ContentStore) -> Result<String> {
    let key = store
        .push(paths::HOME_HERO, serde_json::to_value(slide)?)
        .await?;
    Ok(key)
}

pub async fn save(id: &str, slide: &HeroSlide, store: &ContentStore) -> Result<()> {
    let path = paths::child(paths::HOME_HERO, id);
    store.set(&path, serde_json::to_value(slide)?).await?;
    Ok(())
}

pub async fn list(store: &ContentStore) -> Result<Vec<HeroSlide>> {
    let node = store.snapshot(paths::HOME_HERO).await?;
    Ok(collection::normalize(node.as_ref()))
}

pub async fn delete_by_id(id: &str, store: &ContentStore) -> Result<()> {
    store.remove(&paths::child(paths::HOME_HERO, id)).await?;
    Ok(())
}

/// Writes only `{id}/isActive`, leaving every sibling field untouched.
pub async fn set_active(id: &str, active: bool, store: &ContentStore) -> Result<()> {
    let field = format!("{}/{id}/isActive", paths::HOME_HERO);
    store.set(&field, json!(active)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn toggling_visibility_touches_only_is_active() {
        let store = ContentStore::new();
        let slide = HeroSlide {
            title: "Их хямдрал".to_owned(),
            subtitle: "70% хүртэл".to_owned(),
            image: "data:image/jpeg;base64,xxxx".to_owned(),
            button_text: "Үзэх".to_owned(),
            is_active: true,
            ..Default::default()
        };
        let key = create(&slide, &store).await.unwrap();

        set_active(&key, false, &store).await.unwrap();

        let after = list(&store).await.unwrap().remove(0);
        assert!(!after.is_active);
        assert_eq!(after.title, "Их хямдрал");
        assert_eq!(after.subtitle, "70% хүртэл");
        assert_eq!(after.image, "data:image/jpeg;base64,xxxx");
        assert_eq!(after.button_text, "Үзэх");
    }
}
