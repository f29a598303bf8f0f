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

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod data;
pub mod filter;
pub mod media;
pub mod metrics;
pub mod session;
pub mod storefront;
#[cfg(test)]
pub(crate) mod utils;

pub use hyamdral_common::error::{HyamdralError, Result};
pub use hyamdral_common::settings::Settings;
pub use hyamdral_store::{ContentStore, Subscription, paths};

/// Opens the content store for this process: seeded from the configured
/// seed file when one is set, empty otherwise.
pub async fn open_store(settings: &Settings) -> Result<ContentStore> {
    match &settings.seed_file {
        Some(path) => {
            let bytes = tokio::fs::read(path).await?;
            Ok(ContentStore::from_value(serde_json::from_slice(&bytes)?))
        }
        None => Ok(ContentStore::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn open_store_reads_the_configured_seed() {
        let mut seed = tempfile::NamedTempFile::new().unwrap();
        seed.write_all(br#"{"content": {"general": {"siteName": "Hyamdral.mn"}}}"#)
            .unwrap();

        let settings = Settings {
            seed_file: Some(seed.path().to_path_buf()),
            ..Default::default()
        };
        let store = open_store(&settings).await.unwrap();
        let general = store.snapshot(paths::GENERAL).await.unwrap().unwrap();
        assert_eq!(general["siteName"], "Hyamdral.mn");

        let empty = open_store(&Settings::default()).await.unwrap();
        assert_eq!(empty.snapshot(paths::GENERAL).await.unwrap(), None);
    }
}
