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

//! Admin session state. One [`SessionContext`] per process is the single
//! source of truth for the token: it is loaded once at init, updated only
//! through [`establish`](SessionContext::establish) /
//! [`teardown`](SessionContext::teardown), and consulted by route guards
//! through [`guard`](SessionContext::guard) instead of re-reading storage
//! at arbitrary points. The token is advisory gating for the admin UI,
//! not a security boundary: nothing verifies it server-side.

use hyamdral_common::error::Result;
use hyamdral_common::settings::Settings;
use serde_json::{Map, Value, json};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Fixed storage key the token lives under, shared with prior deployments.
pub const TOKEN_KEY: &str = "adminToken";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGuard {
    Allow,
    RedirectToLogin,
}

#[derive(Debug)]
pub struct SessionContext {
    file: PathBuf,
    token: Option<String>,
}

impl SessionContext {
    /// Loads the persisted token, if any, from the configured session
    /// file. A missing or unreadable file simply means no session.
    pub fn init(settings: &Settings) -> Self {
        let token = fs::read(&settings.session_file)
            .ok()
            .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).ok())
            .and_then(|doc| doc.get(TOKEN_KEY)?.as_str().map(str::to_owned));
        debug!(present = token.is_some(), "session initialized");
        Self {
            file: settings.session_file.clone(),
            token,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Route guard for protected admin views: absent token redirects to
    /// the login view.
    pub fn guard(&self) -> RouteGuard {
        if self.is_authenticated() {
            RouteGuard::Allow
        } else {
            RouteGuard::RedirectToLogin
        }
    }

    /// Stores the token from a fresh sign-in and persists it.
    pub fn establish(&mut self, token: String) -> Result<()> {
        self.token = Some(token);
        self.persist()
    }

    /// Ends the session: the token is dropped in memory and on disk.
    pub fn teardown(&mut self) -> Result<()> {
        self.token = None;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut doc = Map::new();
        if let Some(token) = &self.token {
            doc.insert(TOKEN_KEY.to_owned(), json!(token));
        }
        fs::write(&self.file, serde_json::to_vec(&Value::Object(doc))?)?;
        Ok(())
    }
}
