//! Error types for storage and sign-in.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures while writing to the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failed: {0}")]
    Backend(String),

    #[error("could not encode record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("an account with this email already exists")]
    EmailTaken,
}

/// Reasons the auth form refuses to sign someone in.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("No account found for this email")]
    UnknownAccount,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("could not save account, {0}")]
    Store(StoreError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmailTaken => AuthError::EmailTaken,
            other => AuthError::Store(other),
        }
    }
}
