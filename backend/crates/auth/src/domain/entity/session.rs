//! Session Entity
//!
//! Binding between a token digest and a user. Sessions never expire.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    UserId,
    session_token::{SessionToken, TokenHash},
};

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// SHA-256 of the bearer token (the token itself is not stored)
    pub token_hash: TokenHash,
    /// Reference to User
    pub user_id: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Issue a session for a user
    ///
    /// Returns the entity to persist and the token to hand to the client.
    pub fn issue(user_id: UserId) -> (Self, SessionToken) {
        let token = SessionToken::generate();
        let session = Self {
            token_hash: token.hash(),
            user_id,
            created_at: Utc::now(),
        };
        (session, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_binds_token_to_user() {
        let user_id = UserId::new();
        let (session, token) = Session::issue(user_id);

        assert_eq!(session.user_id, user_id);
        assert_eq!(session.token_hash, token.hash());
    }

    #[test]
    fn test_issue_never_reuses_token() {
        let user_id = UserId::new();
        let (a, _) = Session::issue(user_id);
        let (b, _) = Session::issue(user_id);
        assert_ne!(a.token_hash, b.token_hash);
    }
}
