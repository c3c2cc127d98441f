//! Auth Middleware
//!
//! The bearer gate for protected routes. `require_bearer_session` resolves
//! `Authorization: Bearer <token>` and attaches an [`AuthenticatedUser`] to
//! the request; handlers then take `AuthenticatedUser` as an argument.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<S>,
}

impl<S> AuthGateState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: S) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

/// Identity resolved from a valid bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid bearer session
///
/// - no usable token: 401, the session store is not queried
/// - unknown token: 401
/// - storage failure: 500
pub async fn require_bearer_session<S>(
    State(state): State<AuthGateState<S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = bearer_token(req.headers())?;

    let use_case = CheckSessionUseCase::new(state.repo.clone());
    let user_id = use_case.execute(token).await?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> AuthResult<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::Unauthorized("missing authorization"))?;

    let value = value
        .to_str()
        .map_err(|_| AuthError::Unauthorized("invalid authorization header"))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("Bearer") => match token.trim() {
            "" => Err(AuthError::Unauthorized("invalid authorization header")),
            token => Ok(token),
        },
        _ => Err(AuthError::Unauthorized("invalid authorization header")),
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or(AuthError::Unauthorized("missing authorization"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with("Bearer abc");
        assert_eq!(bearer_token(&headers).unwrap(), "abc");
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        let headers = headers_with("bearer abc");
        assert_eq!(bearer_token(&headers).unwrap(), "abc");
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            bearer_token(&HeaderMap::new()),
            Err(AuthError::Unauthorized("missing authorization"))
        ));
    }

    #[test]
    fn test_wrong_scheme() {
        assert!(bearer_token(&headers_with("Basic YTpi")).is_err());
        assert!(bearer_token(&headers_with("Bearer")).is_err());
        assert!(bearer_token(&headers_with("Bearer ")).is_err());
        assert!(bearer_token(&headers_with("Bearer    ")).is_err());
    }

    #[test]
    fn test_bearer_token_surrounding_spaces_trimmed() {
        assert_eq!(bearer_token(&headers_with("Bearer  abc")).unwrap(), "abc");
        assert_eq!(bearer_token(&headers_with("Bearer abc ")).unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_extractor_without_gate_is_unauthorized() {
        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_extractor_reads_gate_output() {
        let user_id = UserId::new();
        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        parts.extensions.insert(AuthenticatedUser { user_id });

        let user = AuthenticatedUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(user.user_id, user_id);
    }
}
