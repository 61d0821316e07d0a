//! Credential and session token primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session_token`] -- signed session token issue and validation.

pub mod password;
pub mod session_token;
