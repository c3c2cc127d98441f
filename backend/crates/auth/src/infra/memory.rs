//! In-memory repository for tests
//!
//! Same contract as `PgAuthRepository`, backed by maps behind a mutex.
//! `set_unavailable(true)` makes every call fail like a dropped database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{UserId, email::Email, session_token::TokenHash};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    users: HashMap<String, User>,
    sessions: HashMap<TokenHash, UserId>,
}

/// In-memory auth repository
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    tables: Arc<Mutex<Tables>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a storage outage
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored sessions
    pub fn session_count(&self) -> usize {
        self.lock().sessions.len()
    }

    fn check_available(&self) -> AuthResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create_user(&self, user: &User) -> AuthResult<()> {
        self.check_available()?;
        let mut tables = self.lock();
        if tables.users.contains_key(user.email.as_str()) {
            return Err(AuthError::DuplicateEmail);
        }
        tables
            .users
            .insert(user.email.as_str().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        self.check_available()?;
        Ok(self.lock().users.get(email.as_str()).cloned())
    }
}

impl SessionRepository for InMemoryAuthRepository {
    async fn create_session(&self, session: &Session) -> AuthResult<()> {
        self.check_available()?;
        self.lock()
            .sessions
            .insert(session.token_hash, session.user_id);
        Ok(())
    }

    async fn find_user_id(&self, token_hash: &TokenHash) -> AuthResult<Option<UserId>> {
        self.check_available()?;
        Ok(self.lock().sessions.get(token_hash).copied())
    }
}
