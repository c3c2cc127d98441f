//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;

use platform::password::HashParams;

/// Auth application configuration
#[derive(Clone, Default)]
pub struct AuthConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Argon2id cost for newly hashed passwords
    pub hash_params: HashParams,
}

impl AuthConfig {
    /// Default hashing cost with a pepper
    pub fn with_pepper(pepper: Vec<u8>) -> Self {
        Self {
            password_pepper: Some(pepper),
            ..Default::default()
        }
    }

    /// Minimal hashing cost so tests do not spend seconds in Argon2
    #[cfg(any(test, feature = "test-utils"))]
    pub fn insecure_fast() -> Self {
        Self {
            hash_params: HashParams::insecure_fast(),
            ..Default::default()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .field("hash_params", &self.hash_params)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_pepper() {
        let config = AuthConfig::default();
        assert!(config.pepper().is_none());
        assert_eq!(config.hash_params, HashParams::default());
    }

    #[test]
    fn test_pepper_is_redacted_in_debug() {
        let config = AuthConfig::with_pepper(b"sprinkle".to_vec());
        assert_eq!(config.pepper(), Some(&b"sprinkle"[..]));
        assert!(!format!("{:?}", config).contains("sprinkle"));
    }
}
