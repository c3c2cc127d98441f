//! User Password Value Object
//!
//! Domain value object for user passwords.
//! Delegates to `platform::password` for cryptographic operations.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//! use platform::password::HashParams;
//!
//! let raw = RawPassword::new("pw123456".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, HashParams::insecure_fast(), None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use std::fmt;

use platform::password::{ClearTextPassword, HashParams, HashedPassword, PasswordPolicyError};

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Wrapper around `ClearTextPassword` with domain-specific error handling.
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    ///
    /// ## Errors
    /// `AuthError::Validation` when the password is empty, whitespace only,
    /// or longer than `platform::password::MAX_PASSWORD_LENGTH`
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::EmptyOrWhitespace => {
                AuthError::Validation("password is required".to_string())
            }
            PasswordPolicyError::TooLong { .. } => AuthError::Validation(e.to_string()),
        })?;

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated raw password
    ///
    /// ## Arguments
    /// * `raw` - The validated raw password
    /// * `params` - Argon2id cost parameters
    /// * `pepper` - Optional application-wide secret
    pub fn from_raw(
        raw: &RawPassword,
        params: HashParams,
        pepper: Option<&[u8]>,
    ) -> AuthResult<Self> {
        let hashed = raw.inner().hash(params, pepper)?;
        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))?;

        Ok(Self(hashed))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    ///
    /// `pepper` must match the pepper used during hashing.
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::MAX_PASSWORD_LENGTH;

    const FAST: HashParams = HashParams::insecure_fast();

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("pw123456".to_string()).is_ok());

        let long_pass = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        assert!(matches!(
            RawPassword::new(long_pass),
            Err(AuthError::Validation(_))
        ));

        assert!(matches!(
            RawPassword::new("".to_string()),
            Err(AuthError::Validation(msg)) if msg == "password is required"
        ));
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("pw123456".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, FAST, None).unwrap();

        assert!(hashed.verify(&raw, None));

        let wrong = RawPassword::new("pw654321".to_string()).unwrap();
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let raw = RawPassword::new("pw123456".to_string()).unwrap();
        let pepper = b"app_secret_pepper";
        let hashed = UserPassword::from_raw(&raw, FAST, Some(pepper)).unwrap();

        assert!(hashed.verify(&raw, Some(pepper)));
        assert!(!hashed.verify(&raw, None));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let raw = RawPassword::new("pw123456".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, FAST, None).unwrap();

        let restored = UserPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, None));
    }

    #[test]
    fn test_corrupt_stored_hash_is_internal() {
        assert!(matches!(
            UserPassword::from_phc_string("plaintext"),
            Err(AuthError::Internal(_))
        ));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword".to_string()).unwrap();
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = UserPassword::from_raw(&raw, FAST, None).unwrap();
        assert!(format!("{:?}", hashed).contains("HASH"));
    }
}
