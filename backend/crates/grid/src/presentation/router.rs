//! Grid Router

use auth::{AuthGateState, PgAuthRepository, require_bearer_session};
use auth::domain::repository::SessionRepository;
use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::GridConfig;
use crate::domain::repository::GridRepository;
use crate::infra::postgres::PgGridRepository;
use crate::presentation::handlers::{self, GridAppState};

/// Create the grid router with PostgreSQL repositories
pub fn grid_router(
    repo: PgGridRepository,
    gate: AuthGateState<PgAuthRepository>,
    config: GridConfig,
) -> Router {
    grid_router_generic(repo, gate, config)
}

/// Create a generic grid router for any repository implementation
///
/// `/default-grid` is public; everything under `/grids` goes through the
/// bearer gate backed by `gate`.
pub fn grid_router_generic<R, S>(repo: R, gate: AuthGateState<S>, config: GridConfig) -> Router
where
    R: GridRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = GridAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route(
            "/grids",
            post(handlers::create_grid::<R>).get(handlers::list_grids::<R>),
        )
        .route("/grids/{id}", get(handlers::get_grid::<R>))
        .route_layer(from_fn_with_state(gate, require_bearer_session::<S>))
        .with_state(state.clone());

    Router::new()
        .route("/default-grid", get(handlers::get_default_grid::<R>))
        .with_state(state)
        .merge(protected)
}
