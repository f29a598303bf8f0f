use hyamdral_store::StoreError;
use serde_json::Error as SerdeError;
use std::io;
use thiserror::Error;

use crate::auth::AuthError;

#[derive(Debug, Error)]
pub enum HyamdralError {
    #[error("Auth error: `{0}`")]
    Auth(#[from] AuthError),
    #[error("Content store error: `{0}`")]
    Store(#[from] StoreError),
    #[error("Validation error: `{0}`")]
    Validation(String),
    #[error("Media error: `{0}`")]
    Media(String),
    #[error("I/O error: `{0}`")]
    Io(#[from] io::Error),
    #[error("Serialization/deserialization error")]
    Serde(#[from] SerdeError),
    #[error("Figment error: `{0}`")]
    Figment(#[from] figment::Error),
}

pub type Result<T> = std::result::Result<T, HyamdralError>;
