//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{GridId, UserId};

use crate::domain::entities::{Grid, NewGrid};
use crate::error::GridResult;

/// Grid repository trait
#[trait_variant::make(GridRepository: Send)]
pub trait LocalGridRepository {
    /// The grid with no owner (oldest first if several were seeded)
    async fn find_default(&self) -> GridResult<Option<Grid>>;

    /// Atomically replace whatever `owner` has stored with `grid`
    ///
    /// Either the old grid is gone and the new one is stored, or nothing
    /// changed. Concurrent calls for one owner leave exactly one grid.
    async fn replace_for_owner(&self, owner: &UserId, grid: &NewGrid) -> GridResult<Grid>;

    /// Grids owned by `owner`, newest first
    async fn list_by_owner(&self, owner: &UserId) -> GridResult<Vec<Grid>>;

    /// A grid by id, only if `owner` owns it
    async fn find_by_id_and_owner(&self, grid_id: &GridId, owner: &UserId)
    -> GridResult<Option<Grid>>;
}
