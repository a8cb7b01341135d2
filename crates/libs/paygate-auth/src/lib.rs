//! Authentication utilities for the paygate service: password hashing
//! with per-user salts and the bearer token response body.

pub mod auth_body;
pub mod credential;

/// Token type sent to clients alongside every issued access token.
pub const TOKEN_TYPE: &str = "Bearer";
