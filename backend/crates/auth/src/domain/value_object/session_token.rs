//! Session Token Value Object
//!
//! Bearer tokens are 32 bytes from the OS CSPRNG, sent to the client as
//! unpadded base64url (43 characters). The server only keeps the SHA-256
//! digest, so a leaked `sessions` table cannot be replayed.

use std::fmt;

use platform::crypto;

use crate::error::{AuthError, AuthResult};

/// Random bytes per token (256 bits)
pub const SESSION_TOKEN_BYTES: usize = 32;

/// Encoded token length in characters
pub const SESSION_TOKEN_LEN: usize = 43;

/// Opaque bearer token handed to the client after login
#[derive(PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh token
    pub fn generate() -> Self {
        Self(crypto::to_base64url(&crypto::random_bytes(
            SESSION_TOKEN_BYTES,
        )))
    }

    /// Parse a token presented by a client
    ///
    /// Anything that is not the canonical encoding of exactly
    /// `SESSION_TOKEN_BYTES` bytes is rejected without a store lookup.
    pub fn parse(raw: &str) -> AuthResult<Self> {
        if raw.len() != SESSION_TOKEN_LEN {
            return Err(AuthError::Unauthorized("invalid token"));
        }

        match crypto::from_base64url(raw) {
            Ok(bytes) if bytes.len() == SESSION_TOKEN_BYTES => Ok(Self(raw.to_string())),
            _ => Err(AuthError::Unauthorized("invalid token")),
        }
    }

    /// Digest used as the storage key
    pub fn hash(&self) -> TokenHash {
        TokenHash(crypto::sha256(self.0.as_bytes()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

/// SHA-256 digest of a session token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenHash([u8; 32]);

impl TokenHash {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
