//! Get Default Grid Use Case

use std::sync::Arc;

use crate::domain::entities::Grid;
use crate::domain::repository::GridRepository;
use crate::error::{GridError, GridResult};

/// Fetch the system default grid (no login required)
pub struct GetDefaultGridUseCase<R>
where
    R: GridRepository,
{
    repo: Arc<R>,
}

impl<R> GetDefaultGridUseCase<R>
where
    R: GridRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A missing default grid is a deployment problem, reported as
    /// `DefaultGridMissing`
    pub async fn execute(&self) -> GridResult<Grid> {
        self.repo
            .find_default()
            .await?
            .ok_or(GridError::DefaultGridMissing)
    }
}
