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

//! Authentication collaborator. Accounts live in an external
//! email/password identity service; this module defines the seam the
//! platform talks through plus the flows the admin screens run on top of
//! it (sign-in establishing a session, registration writing the profile
//! document, re-authenticated password change, profile updates).

use chrono::Utc;
use hyamdral_common::auth::AuthError;
use hyamdral_common::error::{HyamdralError, Result};
use hyamdral_store::ContentStore;
use tracing::{debug, warn};

use crate::catalog::user::{self, UserProfile};
use crate::session::SessionContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub access_token: String,
}

/// Surface of the external identity service.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> std::result::Result<AuthUser, AuthError>;
    async fn sign_up(&self, email: &str, password: &str) -> std::result::Result<AuthUser, AuthError>;
    /// Fresh credential check required before sensitive actions.
    async fn reauthenticate(
        &self,
        email: &str,
        current_password: &str,
    ) -> std::result::Result<(), AuthError>;
    async fn update_password(
        &self,
        email: &str,
        new_password: &str,
    ) -> std::result::Result<(), AuthError>;
    /// Updates the principal's display name and/or photo. `None` leaves a
    /// field as it is.
    async fn update_profile(
        &self,
        uid: &str,
        display_name: Option<&str>,
        photo_url: Option<&str>,
    ) -> std::result::Result<(), AuthError>;
}

/// Signs in and establishes the admin session with the returned access
/// token.
pub async fn sign_in<A: AuthProvider>(
    auth: &A,
    session: &mut SessionContext,
    email: &str,
    password: &str,
) -> Result<AuthUser> {
    let user = auth.sign_in(email, password).await.inspect_err(|error| {
        warn!(email, %error, "sign-in failed");
    })?;
    session.establish(user.access_token.clone())?;
    debug!(uid = %user.uid, "signed in");
    Ok(user)
}

/// Registers a new admin account and writes its profile document at
/// `users/{uid}` with the default role.
pub async fn register<A: AuthProvider>(
    auth: &A,
    store: &ContentStore,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthUser> {
    let created = auth.sign_up(email, password).await?;
    let profile = UserProfile {
        name: name.to_owned(),
        email: email.to_owned(),
        role: "admin".to_owned(),
        created_at: Utc::now().to_rfc3339(),
        ..Default::default()
    };
    user::create(&created.uid, &profile, store).await?;
    Ok(created)
}

/// Changes the account password. The current password must
/// re-authenticate first; the new password is never applied when that
/// check fails.
pub async fn change_password<A: AuthProvider>(
    auth: &A,
    email: &str,
    current_password: &str,
    new_password: &str,
) -> Result<()> {
    auth.reauthenticate(email, current_password).await?;
    auth.update_password(email, new_password).await?;
    Ok(())
}

/// Renames the admin in both the profile document and the auth
/// principal. The email is immutable through this flow.
pub async fn update_display_name<A: AuthProvider>(
    auth: &A,
    store: &ContentStore,
    uid: &str,
    name: &str,
) -> Result<()> {
    user::set_name(uid, name, store).await?;
    auth.update_profile(uid, Some(name), None)
        .await
        .map_err(HyamdralError::Auth)?;
    Ok(())
}
