//! API DTOs (Data Transfer Objects)
//!
//! Missing string fields deserialize as empty and are rejected by the use
//! cases, so "absent" and "empty" produce the same 400.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: LoginRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(req.email, "a@x.com");
        assert!(req.password.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result =
            serde_json::from_str::<RegisterRequest>(r#"{"email":"a","password":"b","admin":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_login_response_shape() {
        let body = serde_json::to_value(LoginResponse {
            token: "t".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "token": "t" }));
    }
}
