//! Auth session state machine
//!
//! Anonymous -> Authenticating on submit, then Authenticated on success or
//! back to Anonymous on failure. Every change is published on a watch
//! channel so the login screen can redirect once signed in.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

use super::provider::{AuthError, AuthProvider, AuthUser};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AuthState {
    Anonymous,
    Authenticating,
    Authenticated(AuthUser),
}

impl AuthState {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

pub struct AuthSession {
    provider: Arc<dyn AuthProvider>,
    state: watch::Sender<AuthState>,
}

impl AuthSession {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        let (state, _) = watch::channel(AuthState::Anonymous);
        Self { provider, state }
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Stream of state changes, starting at the current state
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let started = self.state.send_if_modified(|state| {
            if *state == AuthState::Authenticating {
                false
            } else {
                *state = AuthState::Authenticating;
                true
            }
        });
        if !started {
            return Err(AuthError::InProgress);
        }
        let pending = PendingSignIn { state: &self.state };

        match self.provider.sign_in(email, password).await {
            Ok(user) => {
                log::info!("Logged in with: {}", user.email);
                std::mem::forget(pending);
                self.state.send_replace(AuthState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(e) => {
                log::warn!("Sign-in failed: {}", e);
                Err(e)
            }
        }
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await?;
        if let Some(user) = self.state.send_replace(AuthState::Anonymous).user() {
            log::info!("Signed out: {}", user.email);
        }
        Ok(())
    }
}

/// Falls back to `Anonymous` unless the sign-in completed, including when
/// the sign-in future is dropped mid-flight
struct PendingSignIn<'a> {
    state: &'a watch::Sender<AuthState>,
}

impl Drop for PendingSignIn<'_> {
    fn drop(&mut self) {
        self.state.send_replace(AuthState::Anonymous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::auth::{AdminAccount, LocalAuthProvider};

    fn session() -> AuthSession {
        let provider = LocalAuthProvider::new(vec![AdminAccount::with_password_iterations(
            "admin@mensa.de",
            "pw",
            8,
        )]);
        AuthSession::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn success_and_sign_out_transitions() {
        let session = session();
        let mut changes = session.subscribe();
        assert_eq!(*changes.borrow_and_update(), AuthState::Anonymous);

        let user = session.sign_in("admin@mensa.de", "pw").await.unwrap();
        assert_eq!(session.state(), AuthState::Authenticated(user.clone()));
        assert!(changes.has_changed().unwrap());
        assert_eq!(changes.borrow_and_update().user(), Some(&user));

        session.sign_out().await.unwrap();
        assert_eq!(session.state(), AuthState::Anonymous);
    }

    #[tokio::test]
    async fn failure_returns_to_anonymous_with_message() {
        let session = session();
        let err = session.sign_in("admin@mensa.de", "nope").await.unwrap_err();
        assert_eq!(err.to_string(), "The password is invalid.");
        assert_eq!(session.state(), AuthState::Anonymous);
    }

    /// Provider that blocks until released
    struct Gate(Notify);

    #[async_trait]
    impl AuthProvider for Gate {
        async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthUser, AuthError> {
            self.0.notified().await;
            Ok(AuthUser { email: email.to_string() })
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn second_submit_while_authenticating_is_rejected() {
        let gate = Arc::new(Gate(Notify::new()));
        let session = Arc::new(AuthSession::new(gate.clone()));

        let pending = tokio::spawn({
            let session = session.clone();
            async move { session.sign_in("a@b.de", "pw").await }
        });
        let mut changes = session.subscribe();
        changes
            .wait_for(|s| *s == AuthState::Authenticating)
            .await
            .unwrap();

        assert_eq!(session.sign_in("a@b.de", "pw").await, Err(AuthError::InProgress));

        gate.0.notify_one();
        assert!(pending.await.unwrap().is_ok());
        assert!(session.state().user().is_some());
    }

    #[tokio::test]
    async fn abandoned_sign_in_returns_to_anonymous() {
        let gate = Arc::new(Gate(Notify::new()));
        let session = Arc::new(AuthSession::new(gate.clone()));

        let pending = tokio::spawn({
            let session = session.clone();
            async move { session.sign_in("a@b.de", "pw").await }
        });
        session
            .subscribe()
            .wait_for(|s| *s == AuthState::Authenticating)
            .await
            .unwrap();

        pending.abort();
        assert!(pending.await.unwrap_err().is_cancelled());
        assert_eq!(session.state(), AuthState::Anonymous);

        gate.0.notify_one();
        assert!(session.sign_in("a@b.de", "pw").await.is_ok());
    }

    #[test]
    fn state_serializes_with_status_tag() {
        let state = AuthState::Authenticated(AuthUser { email: "a@b.de".into() });
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["status"], "authenticated");
        assert_eq!(value["email"], "a@b.de");
    }
}
