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
use hyamdral_store::{ContentStore, paths};
use serde::{Deserialize, Serialize};
use serde_json::{Map, json};

/// Admin profile document at `users/{uid}`, keyed by the auth principal's
/// uid. The email mirrors the auth account and is immutable here; name and
/// avatar change through narrow field merges so the rest of the document
/// is never rewritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(skip_serializing, default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub created_at: String,
}

pub async fn get(uid: &str, store: &ContentStore) -> Result<Option<UserProfile>> {
    let node = store.snapshot(&paths::user(uid)).await?;
    Ok(node.and_then(|value| hyamdral_store::record(uid, value)))
}

pub async fn create(uid: &str, profile: &UserProfile, store: &ContentStore) -> Result<()> {
    store
        .set(&paths::user(uid), serde_json::to_value(profile)?)
        .await?;
    Ok(())
}

pub async fn set_name(uid: &str, name: &str, store: &ContentStore) -> Result<()> {
    let mut fields = Map::new();
    fields.insert("name".to_owned(), json!(name));
    store.update(&paths::user(uid), fields).await?;
    Ok(())
}

pub async fn set_avatar(uid: &str, data_uri: &str, store: &ContentStore) -> Result<()> {
    let mut fields = Map::new();
    fields.insert("avatar".to_owned(), json!(data_uri));
    store.update(&paths::user(uid), fields).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn field_merges_leave_the_rest_of_the_profile_alone() {
        let store = ContentStore::new();
        let profile = UserProfile {
            name: "Бат".to_owned(),
            email: "bat@hyamdral.mn".to_owned(),
            role: "admin".to_owned(),
            created_at: "2025-03-01T08:00:00Z".to_owned(),
            ..Default::default()
        };
        create("uid-1", &profile, &store).await.unwrap();

        set_avatar("uid-1", "data:image/png;base64,abcd", &store)
            .await
            .unwrap();
        set_name("uid-1", "Батболд", &store).await.unwrap();

        let loaded = get("uid-1", &store).await.unwrap().unwrap();
        assert_eq!(loaded.id, "uid-1");
        assert_eq!(loaded.name, "Батболд");
        assert_eq!(loaded.avatar, "data:image/png;base64,abcd");
        assert_eq!(loaded.email, "bat@hyamdral.mn");
        assert_eq!(loaded.role, "admin");
        assert_eq!(loaded.created_at, "2025-03-01T08:00:00Z");
    }

    #[tokio::test]
    async fn absent_profiles_read_as_none() {
        let store = ContentStore::new();
        assert!(get("nobody", &store).await.unwrap().is_none());
    }
}
