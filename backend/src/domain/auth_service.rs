//! Signup and login use-cases over the user repository port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::{LoginCredentials, PasswordDigest};
use crate::domain::forms::{FormErrors, FormOutcome, NON_FIELD, REQUIRED_FIELD};
use crate::domain::ports::{AuthService, LoginRejection, SignupForm, UserRepository, LOGIN_FAILED};
use crate::domain::user::{User, UserId, Username, UserValidationError};
use crate::domain::Error;

/// Field error raised when the requested username is already registered.
const USERNAME_TAKEN: &str = "A user with that username already exists.";

/// [`AuthService`] implementation over a [`UserRepository`].
#[derive(Clone)]
pub struct AuthServiceImpl {
    users: Arc<dyn UserRepository>,
}

impl AuthServiceImpl {
    /// Create a new service backed by the given repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

/// Field-validate a signup form into a usable username and password.
fn validate_signup(form: &SignupForm) -> Result<(Username, &str), FormErrors> {
    let mut errors = FormErrors::new();

    let username = match Username::new(form.username.as_str()) {
        Ok(username) => Some(username),
        Err(UserValidationError::EmptyUsername) => {
            errors.add("username", REQUIRED_FIELD);
            None
        }
        Err(err) => {
            errors.add("username", err.to_string());
            None
        }
    };

    if form.password.is_empty() {
        errors.add("password", REQUIRED_FIELD);
    }

    match (username, errors.is_empty()) {
        (Some(username), true) => Ok((username, form.password.as_str())),
        _ => Err(errors),
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn signup(&self, form: SignupForm) -> Result<FormOutcome<UserId>, Error> {
        let (username, password) = match validate_signup(&form) {
            Ok(validated) => validated,
            Err(errors) => return Ok(FormOutcome::Rejected(errors)),
        };
        if self.users.find_by_username(&username).await?.is_some() {
            return Ok(FormOutcome::Rejected(FormErrors::field(
                "username",
                USERNAME_TAKEN,
            )));
        }

        let digest = PasswordDigest::digest(password)
            .map_err(|err| Error::internal(format!("password hashing failed: {err}")))?;
        let user = User {
            id: UserId::random(),
            username,
            password: digest,
        };
        let id = user.id;
        self.users.insert(user).await?;
        tracing::info!(user = %id, "user registered");
        Ok(FormOutcome::Accepted(id))
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<FormOutcome<UserId>, Error> {
        let rejected = || FormOutcome::Rejected(FormErrors::field(NON_FIELD, LOGIN_FAILED));

        let Ok(username) = Username::new(credentials.username()) else {
            // Unrepresentable usernames cannot match a stored user; reject
            // with the same message as any other mismatch.
            tracing::debug!(rejection = ?LoginRejection::UnknownUsername, "login rejected");
            return Ok(rejected());
        };
        let Some(user) = self.users.find_by_username(&username).await? else {
            tracing::debug!(rejection = ?LoginRejection::UnknownUsername, "login rejected");
            return Ok(rejected());
        };
        if !user.password.verify(credentials.password()) {
            tracing::debug!(rejection = ?LoginRejection::WrongPassword, "login rejected");
            return Ok(rejected());
        }

        tracing::info!(user = %user.id, "login succeeded");
        Ok(FormOutcome::Accepted(user.id))
    }
}
