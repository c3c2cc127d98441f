//! HTTP Handlers

use auth::AuthenticatedUser;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::extract::StrictJson;
use std::sync::Arc;

use crate::application::config::GridConfig;
use crate::application::{
    GetDefaultGridUseCase, GetGridUseCase, ListGridsUseCase, ReplaceGridInput, ReplaceGridUseCase,
};
use crate::domain::repository::GridRepository;
use crate::error::GridResult;
use crate::presentation::dto::{CreateGridRequest, GridResponse};

/// Shared state for grid handlers
#[derive(Clone)]
pub struct GridAppState<R>
where
    R: GridRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<GridConfig>,
}

/// GET /default-grid
pub async fn get_default_grid<R>(
    State(state): State<GridAppState<R>>,
) -> GridResult<Json<GridResponse>>
where
    R: GridRepository + Clone + Send + Sync + 'static,
{
    let grid = GetDefaultGridUseCase::new(state.repo.clone())
        .execute()
        .await?;

    Ok(Json(grid.into()))
}

/// POST /grids
pub async fn create_grid<R>(
    State(state): State<GridAppState<R>>,
    user: AuthenticatedUser,
    StrictJson(req): StrictJson<CreateGridRequest>,
) -> GridResult<(StatusCode, Json<GridResponse>)>
where
    R: GridRepository + Clone + Send + Sync + 'static,
{
    let use_case = ReplaceGridUseCase::new(state.repo.clone(), state.config.clone());

    let input = ReplaceGridInput {
        title: req.title,
        data: req.data,
    };

    let grid = use_case.execute(&user, input).await?;

    Ok((StatusCode::CREATED, Json(grid.into())))
}

/// GET /grids
pub async fn list_grids<R>(
    State(state): State<GridAppState<R>>,
    user: AuthenticatedUser,
) -> GridResult<Json<Vec<GridResponse>>>
where
    R: GridRepository + Clone + Send + Sync + 'static,
{
    let grids = ListGridsUseCase::new(state.repo.clone())
        .execute(&user)
        .await?;

    Ok(Json(grids.into_iter().map(GridResponse::from).collect()))
}

/// GET /grids/{id}
pub async fn get_grid<R>(
    State(state): State<GridAppState<R>>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> GridResult<Json<GridResponse>>
where
    R: GridRepository + Clone + Send + Sync + 'static,
{
    let grid = GetGridUseCase::new(state.repo.clone())
        .execute(&user, &id)
        .await?;

    Ok(Json(grid.into()))
}
