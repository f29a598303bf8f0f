use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid content path: `{0}`")]
    InvalidPath(String),
    #[error("not a record node at `{0}`")]
    NotAnObject(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
