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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnerStore {
    #[serde(skip_serializing, default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub logo: String,
}

pub async fn create(partner: &PartnerStore, store: &ContentStore) -> Result<String> {
    let key = store
        .push(paths::HOME_PARTNERS, serde_json::to_value(partner)?)
        .await?;
    Ok(key)
}

pub async fn save(id: &str, partner: &PartnerStore, store: &ContentStore) -> Result<()> {
    let path = paths::child(paths::HOME_PARTNERS, id);
    store.set(&path, serde_json::to_value(partner)?).await?;
    Ok(())
}

pub async fn list(store: &ContentStore) -> Result<Vec<PartnerStore>> {
    let node = store.snapshot(paths::HOME_PARTNERS).await?;
    Ok(collection::normalize(node.as_ref()))
}

pub async fn delete_by_id(id: &str, store: &ContentStore) -> Result<()> {
    store
        .remove(&paths::child(paths::HOME_PARTNERS, id))
        .await?;
    Ok(())
}
