//! Authentication provider contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Signed-in administrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
}

/// Sign-in and sign-out failures. The message is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("The email address is badly formatted.")]
    InvalidEmail,
    #[error("There is no user record corresponding to this email.")]
    UnknownAccount,
    #[error("The password is invalid.")]
    WrongPassword,
    #[error("A sign-in is already in progress.")]
    InProgress,
    #[error("{0}")]
    Provider(String),
}

/// Identity backend used by the admin login
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}
