//! Replace Grid Use Case
//!
//! Stores a new grid for the caller, discarding the previous one.

use std::sync::Arc;

use auth::AuthenticatedUser;
use serde_json::Value;

use crate::application::config::GridConfig;
use crate::domain::entities::{Grid, NewGrid};
use crate::domain::repository::GridRepository;
use crate::domain::value_objects::{GridData, GridTitle};
use crate::error::GridResult;

/// Replace grid input
pub struct ReplaceGridInput {
    pub title: String,
    /// `None` when the field was absent; `null` is a value
    pub data: Option<Value>,
}

/// Replace grid use case
pub struct ReplaceGridUseCase<R>
where
    R: GridRepository,
{
    repo: Arc<R>,
    config: Arc<GridConfig>,
}

impl<R> ReplaceGridUseCase<R>
where
    R: GridRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<GridConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        user: &AuthenticatedUser,
        input: ReplaceGridInput,
    ) -> GridResult<Grid> {
        let title = GridTitle::new(input.title, self.config.max_title_len)?;
        let data = GridData::new(input.data)?;

        let grid = self
            .repo
            .replace_for_owner(&user.user_id, &NewGrid::new(title, data))
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            grid_id = %grid.id,
            "Grid replaced"
        );

        Ok(grid)
    }
}
