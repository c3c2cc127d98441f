//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases (register, login, session resolution)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, bearer gate
//!
//! ## Features
//! - Registration with email + password
//! - Login issuing an opaque bearer token
//! - `require_bearer_session` middleware + `AuthenticatedUser` extractor for
//!   routes owned by other crates
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Tokens are 256-bit random values; only their SHA-256 is stored
//! - Unknown email and wrong password are indistinguishable (message and timing)
//! - Sessions do not expire

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthGateState, AuthenticatedUser, require_bearer_session};
pub use presentation::router::{auth_router, auth_router_generic};

#[cfg(any(test, feature = "test-utils"))]
pub use infra::memory::InMemoryAuthRepository;
