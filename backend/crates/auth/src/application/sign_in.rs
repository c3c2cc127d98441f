//! Sign In Use Case
//!
//! Authenticates a user and issues a bearer session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    UserId,
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Bearer token for the `Authorization` header
    pub token: String,
    pub user_id: UserId,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(
                "email and password are required".to_string(),
            ));
        }

        // A password registration would refuse can never match
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = match Email::new(input.email) {
            Ok(email) => self.user_repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        // Unknown users still pay for one Argon2 run so response time does
        // not reveal whether the email is registered.
        let params = self.config.hash_params;
        let pepper = self.config.password_pepper.clone();
        let (user, password_valid) = tokio::task::spawn_blocking(move || {
            let valid = match &user {
                Some(user) => user.password_hash.verify(&raw_password, pepper.as_deref()),
                None => {
                    let _ = UserPassword::from_raw(&raw_password, params, pepper.as_deref());
                    false
                }
            };
            (user, valid)
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Verification task failed: {e}")))?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let (session, token) = Session::issue(user.user_id);
        self.session_repo.create_session(&session).await?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(SignInOutput {
            token: token.into_string(),
            user_id: user.user_id,
        })
    }
}
