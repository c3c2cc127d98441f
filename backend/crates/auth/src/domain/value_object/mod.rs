//! Value Object Module

pub mod email;
pub mod session_token;
pub mod user_password;

pub use kernel::id::UserId;
