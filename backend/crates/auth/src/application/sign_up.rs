//! Sign Up Use Case
//!
//! Registers a new user with an email and password.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    UserId,
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user_id: UserId,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let email = Email::new(input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        // Argon2 is CPU bound; keep it off the async workers
        let params = self.config.hash_params;
        let pepper = self.config.password_pepper.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, params, pepper.as_deref())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Hashing task failed: {e}")))??;

        let user = User::new(email, password_hash);
        self.user_repo.create_user(&user).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(SignUpOutput {
            user_id: user.user_id,
        })
    }
}
