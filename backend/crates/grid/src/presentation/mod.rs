//! Presentation Layer
//!
//! HTTP handlers, DTOs, router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::GridAppState;
pub use router::{grid_router, grid_router_generic};
