//! Admin Authentication
//!
//! Provider abstraction, the local account provider and the session state
//! machine the login screen follows.

mod provider;
mod local;
mod session;

pub use provider::{AuthError, AuthProvider, AuthUser};
pub use local::{AdminAccount, LocalAuthProvider, DEFAULT_PBKDF2_ITERATIONS};
pub use session::{AuthSession, AuthState};
