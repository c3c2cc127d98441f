//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Per-user use cases take the `AuthenticatedUser` produced by the bearer
//! gate as an explicit argument.

pub mod config;
pub mod get_default_grid;
pub mod get_grid;
pub mod list_grids;
pub mod replace_grid;

pub use config::GridConfig;
pub use get_default_grid::GetDefaultGridUseCase;
pub use get_grid::GetGridUseCase;
pub use list_grids::ListGridsUseCase;
pub use replace_grid::{ReplaceGridInput, ReplaceGridUseCase};
