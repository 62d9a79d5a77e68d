//! Driving port for signup and login.

use async_trait::async_trait;

use crate::domain::auth::LoginCredentials;
use crate::domain::forms::FormOutcome;
use crate::domain::user::UserId;
use crate::domain::Error;

/// Non-field error shown when login credentials do not match a user.
///
/// Deliberately identical for an unknown username and a wrong password so the
/// login form does not reveal which usernames exist.
pub const LOGIN_FAILED: &str = "Please enter a correct username and password.";

/// Raw signup form submission.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    /// Requested login name.
    pub username: String,
    /// Plain password; digested before it reaches a repository.
    pub password: String,
}

/// Marker for the two ways a login form can fail validation.
///
/// Both render as a [`LOGIN_FAILED`] non-field error; the distinction exists
/// for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginRejection {
    /// No user with the submitted username.
    UnknownUsername,
    /// User exists but the password did not verify.
    WrongPassword,
}

/// Driving port for account management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Validate and register a new user.
    ///
    /// A duplicate username rejects the form with a field error and writes
    /// nothing.
    async fn signup(&self, form: SignupForm) -> Result<FormOutcome<UserId>, Error>;

    /// Check credentials against the user store.
    ///
    /// A mismatch rejects the form with the [`LOGIN_FAILED`] non-field
    /// error; only adapter failures surface as `Err`.
    async fn login(&self, credentials: &LoginCredentials) -> Result<FormOutcome<UserId>, Error>;
}
