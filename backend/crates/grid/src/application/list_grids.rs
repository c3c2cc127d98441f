//! List Grids Use Case

use std::sync::Arc;

use auth::AuthenticatedUser;

use crate::domain::entities::Grid;
use crate::domain::repository::GridRepository;
use crate::error::GridResult;

/// The caller's grids, newest first
pub struct ListGridsUseCase<R>
where
    R: GridRepository,
{
    repo: Arc<R>,
}

impl<R> ListGridsUseCase<R>
where
    R: GridRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user: &AuthenticatedUser) -> GridResult<Vec<Grid>> {
        self.repo.list_by_owner(&user.user_id).await
    }
}
