//! Hero Grid Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Grid entity, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Storage Model
//! - Each user owns at most one grid; saving a grid replaces the old one
//!   in a single transaction
//! - A grid with no owner is the system default, readable without login
//! - Grid `data` is opaque JSON, stored and returned verbatim
//! - Per-user routes sit behind `auth::require_bearer_session`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GridConfig;
pub use error::{GridError, GridResult};
pub use infra::postgres::PgGridRepository;
pub use presentation::router::{grid_router, grid_router_generic};

#[cfg(any(test, feature = "test-utils"))]
pub use infra::memory::InMemoryGridRepository;
