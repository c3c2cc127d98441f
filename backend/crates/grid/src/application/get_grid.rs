//! Get Grid Use Case

use std::sync::Arc;

use auth::AuthenticatedUser;
use kernel::id::GridId;

use crate::domain::entities::Grid;
use crate::domain::repository::GridRepository;
use crate::error::{GridError, GridResult};

/// One of the caller's grids by id
pub struct GetGridUseCase<R>
where
    R: GridRepository,
{
    repo: Arc<R>,
}

impl<R> GetGridUseCase<R>
where
    R: GridRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Parse a path id and fetch the grid
    ///
    /// Someone else's grid is reported as `NotFound`, same as a missing one.
    pub async fn execute(&self, user: &AuthenticatedUser, raw_id: &str) -> GridResult<Grid> {
        let grid_id: GridId = raw_id.parse().map_err(|_| GridError::InvalidId)?;

        self.repo
            .find_by_id_and_owner(&grid_id, &user.user_id)
            .await?
            .ok_or(GridError::NotFound)
    }
}
