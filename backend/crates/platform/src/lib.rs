//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (CSPRNG bytes, SHA-256, base64url)
//! - Password hashing (Argon2id)

pub mod crypto;
pub mod password;
