// hyamdral-common
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

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = "hyamdral.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Where the advisory admin session token is persisted between runs.
    pub session_file: PathBuf,
    /// Optional JSON document tree to seed the content store from.
    pub seed_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            session_file: PathBuf::from(".hyamdral/session.json"),
            seed_file: None,
        }
    }
}

impl Settings {
    /// Layered load: defaults, then `hyamdral.toml`, then `HYAMDRAL_*`
    /// environment variables.
    pub fn load() -> Result<Self> {
        Self::from_figment(Figment::new().merge(Toml::file(DEFAULT_CONFIG_FILE)))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let settings = Figment::from(Serialized::defaults(Self::default()))
            .merge(figment)
            .merge(Env::prefixed("HYAMDRAL_"))
            .extract()?;
        Ok(settings)
    }
}
