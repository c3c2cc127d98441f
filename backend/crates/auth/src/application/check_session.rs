//! Check Session Use Case
//!
//! Resolves a presented bearer token to the user it was issued for.

use std::sync::Arc;

use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{UserId, session_token::SessionToken};
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Resolve a raw token
    ///
    /// ## Errors
    /// - `Unauthorized` if the token is malformed (the store is not queried)
    /// - `SessionNotFound` if no session is bound to it
    /// - `Database` on storage failure
    pub async fn execute(&self, raw_token: &str) -> AuthResult<UserId> {
        let token = SessionToken::parse(raw_token)?;

        self.session_repo
            .find_user_id(&token.hash())
            .await?
            .ok_or(AuthError::SessionNotFound)
    }
}
