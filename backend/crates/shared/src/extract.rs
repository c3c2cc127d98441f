//! Strict JSON body extractor
//!
//! `axum::Json` answers 422 for well-formed JSON that does not fit the target
//! type and 415 for a missing content type. The API contract treats every
//! undecodable body as a 400, so request DTOs are read through [`StrictJson`]
//! instead. Unknown fields are rejected by `#[serde(deny_unknown_fields)]` on
//! the DTO; trailing content after the value is rejected by `serde_json`.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;
use crate::error::kind::ErrorKind;

/// JSON request body decoded with 400-on-anything semantics
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::new(ErrorKind::PayloadTooLarge, "Request body too large")
            } else {
                AppError::bad_request("Failed to read request body")
            }
        })?;

        let value = serde_json::from_slice(&bytes)?;
        Ok(StrictJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Item {
        name: String,
    }

    async fn extract(body: &'static str) -> Result<Item, AppError> {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();
        StrictJson::<Item>::from_request(req, &()).await.map(|j| j.0)
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        let item = extract(r#"{"name":"axe"}"#).await.unwrap();
        assert_eq!(item.name, "axe");
    }

    #[tokio::test]
    async fn test_accepts_surrounding_whitespace() {
        let item = extract("  {\"name\":\"axe\"}\n").await.unwrap();
        assert_eq!(item.name, "axe");
    }

    #[tokio::test]
    async fn test_rejects_unknown_field() {
        let err = extract(r#"{"name":"axe","extra":1}"#).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_rejects_trailing_content() {
        let err = extract(r#"{"name":"axe"}{"name":"lina"}"#).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_rejects_empty_body() {
        let err = extract("").await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
