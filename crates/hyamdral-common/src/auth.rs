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

//! Errors reported by the authentication collaborator, with the
//! user-facing Mongolian messages the admin screens display. The same
//! underlying kind maps to different wording depending on the flow
//! (signing in vs. re-authenticating before a password change).

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    InvalidCredential,
    UserNotFound,
    WrongPassword,
    EmailAlreadyInUse,
    WeakPassword,
    Other,
}

#[derive(Debug, Error)]
#[error("{detail}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub detail: String,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn other(detail: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Other, detail)
    }

    fn is_bad_credential(&self) -> bool {
        matches!(
            self.kind,
            AuthErrorKind::InvalidCredential
                | AuthErrorKind::UserNotFound
                | AuthErrorKind::WrongPassword
        )
    }

    /// Message shown on the login screen.
    pub fn sign_in_message(&self) -> String {
        if self.is_bad_credential() {
            "Имэйл эсвэл нууц үг буруу байна.".to_owned()
        } else {
            format!("Нэвтрэхэд алдаа гарлаа: {}", self.detail)
        }
    }

    /// Message shown when re-authentication before a sensitive action
    /// fails.
    pub fn reauth_message(&self) -> String {
        if self.is_bad_credential() {
            "Одоогийн нууц үг буруу байна.".to_owned()
        } else {
            format!("Алдаа: {}", self.detail)
        }
    }

    /// Message shown on the registration screen.
    pub fn register_message(&self) -> String {
        match self.kind {
            AuthErrorKind::EmailAlreadyInUse => "Энэ имэйл хаяг бүртгэлтэй байна.".to_owned(),
            AuthErrorKind::WeakPassword => {
                "Нууц үг хэтэрхий сул байна (хамгийн багадаа 6 тэмдэгт).".to_owned()
            }
            _ => format!("Бүртгүүлэхэд алдаа гарлаа: {}", self.detail),
        }
    }
}
