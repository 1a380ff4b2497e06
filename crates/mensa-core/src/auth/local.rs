//! Local admin accounts
//!
//! Accounts come from the application config. Passwords are stored as
//! PBKDF2-HMAC-SHA256 hashes with a per-account salt, both base64 encoded.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::provider::{AuthError, AuthProvider, AuthUser};

pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 200_000;
const SALT_LEN: usize = 16;

/// One administrator entry of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAccount {
    pub email: String,
    pub salt: String,
    pub hash: String,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

fn default_iterations() -> u32 {
    DEFAULT_PBKDF2_ITERATIONS
}

impl AdminAccount {
    /// Hash `password` under a fresh random salt
    pub fn with_password(email: &str, password: &str) -> Self {
        Self::with_password_iterations(email, password, DEFAULT_PBKDF2_ITERATIONS)
    }

    pub fn with_password_iterations(email: &str, password: &str, iterations: u32) -> Self {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let iterations = iterations.max(1);
        Self {
            email: email.trim().to_string(),
            salt: B64.encode(salt),
            hash: B64.encode(derive_key(password, &salt, iterations)),
            iterations,
        }
    }

    fn verify(&self, password: &str) -> bool {
        if password.is_empty() {
            return false;
        }
        let Ok(salt) = B64.decode(&self.salt) else {
            log::warn!("Admin account {} has an undecodable salt", self.email);
            return false;
        };
        let Ok(expected) = B64.decode(&self.hash) else {
            log::warn!("Admin account {} has an undecodable hash", self.email);
            return false;
        };
        let key = derive_key(password, &salt, self.iterations.max(1));
        key.as_slice().ct_eq(expected.as_slice()).into()
    }
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; 32] {
    let mut key = [0u8; 32];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

fn is_well_formed_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Provider checking credentials against configured admin accounts
#[derive(Debug, Clone, Default)]
pub struct LocalAuthProvider {
    accounts: Vec<AdminAccount>,
}

impl LocalAuthProvider {
    pub fn new(accounts: Vec<AdminAccount>) -> Self {
        if accounts.is_empty() {
            log::warn!("No admin accounts configured; admin sign-in is disabled");
        }
        Self { accounts }
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let email = email.trim();
        if !is_well_formed_email(email) {
            return Err(AuthError::InvalidEmail);
        }

        let account = self
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .ok_or(AuthError::UnknownAccount)?;

        if !account.verify(password) {
            return Err(AuthError::WrongPassword);
        }

        Ok(AuthUser {
            email: account.email.clone(),
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}
