//! Application router assembly

use auth::domain::repository::{SessionRepository, UserRepository};
use auth::{AuthConfig, AuthGateState, auth_router_generic};
use axum::{Json, Router, routing::get};
use grid::domain::repository::GridRepository;
use grid::{GridConfig, grid_router_generic};
use serde_json::{Value, json};

/// Build the full HTTP surface over the given repositories
///
/// `auth_repo` backs both the `/auth` routes and the bearer gate in front
/// of `/grids`.
pub fn build_router<A, G>(
    auth_repo: A,
    grid_repo: G,
    auth_config: AuthConfig,
    grid_config: GridConfig,
) -> Router
where
    A: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    G: GridRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGateState::new(auth_repo.clone());

    Router::new()
        .route("/health", get(health))
        .nest("/auth", auth_router_generic(auth_repo, auth_config))
        .merge(grid_router_generic(grid_repo, gate, grid_config))
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::InMemoryAuthRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use grid::InMemoryGridRepository;
    use tower::ServiceExt;

    fn app() -> (Router, InMemoryGridRepository) {
        let grids = InMemoryGridRepository::new();
        let router = build_router(
            InMemoryAuthRepository::new(),
            grids.clone(),
            AuthConfig::insecure_fast(),
            GridConfig::default(),
        );
        (router, grids)
    }

    async fn call(
        router: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let resp = router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _) = app();
        let (status, body) = call(&router, "GET", "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_full_scenario() {
        let (router, grids) = app();
        grids.seed_default("Default", json!({"heroes": []}));
        let creds = json!({"email": "a@x.com", "password": "pw123456"});

        let (status, body) = call(&router, "POST", "/auth/register", None, Some(creds.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, Value::Null);

        let (status, _) = call(&router, "POST", "/auth/register", None, Some(creds.clone())).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = call(&router, "POST", "/auth/login", None, Some(creds)).await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap().to_string();

        let (status, default) = call(&router, "GET", "/default-grid", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(default["title"], json!("Default"));

        let (status, first) = call(
            &router,
            "POST",
            "/grids",
            Some(&token),
            Some(json!({"title": "My Grid", "data": {"heroes": [1, 2, 3]}})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, list) = call(&router, "GET", "/grids", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([first.clone()]));

        let (status, second) = call(
            &router,
            "POST",
            "/grids",
            Some(&token),
            Some(json!({"title": "V2", "data": {"heroes": [4]}})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(second["id"], first["id"]);

        let (status, list) = call(&router, "GET", "/grids", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([second.clone()]));
        assert_eq!(list[0]["data"], json!({"heroes": [4]}));

        let old_uri = format!("/grids/{}", first["id"].as_str().unwrap());
        let (status, _) = call(&router, "GET", &old_uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = call(&router, "GET", "/grids", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (router, _) = app();
        let (status, _) = call(&router, "GET", "/nope", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
