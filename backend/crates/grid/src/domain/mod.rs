//! Domain Layer - Grid entity and storage contract
//!
//! This layer contains:
//! - Domain entities (Grid, NewGrid)
//! - Domain value objects (GridTitle, GridData)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
