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

/// Site-wide settings. A singleton document at `content/general`,
/// overwritten wholesale on every save; there is no partial edit flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub site_description: String,
    #[serde(default)]
    pub footer_text: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub favicon: String,
}

/// Absent or undecodable settings read back as the defaults.
pub async fn load(store: &ContentStore) -> Result<GeneralSettings> {
    let node = store.snapshot(paths::GENERAL).await?;
    Ok(node
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default())
}

pub async fn save(settings: &GeneralSettings, store: &ContentStore) -> Result<()> {
    store
        .set(paths::GENERAL, serde_json::to_value(settings)?)
        .await?;
    Ok(())
}
