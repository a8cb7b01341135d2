//! Authentication response structures.
//!
//! Standard response format for issued access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TOKEN_TYPE;

/// Authentication response with access token.
///
/// Contains the opaque access token, its expiry instant, and the token
/// type for HTTP authentication.
///
/// # JSON Format
///
/// ```json
/// {
///   "access_token": "8b2f8f4e-6c0a-4bb3-9c6e-0f6a2f9f3c11",
///   "expires": "2026-01-01T12:05:00Z",
///   "token_type": "Bearer"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthBody {
    /// The opaque access token value.
    pub access_token: String,
    /// When the token stops being accepted.
    pub expires: DateTime<Utc>,
    /// The token type (always "Bearer").
    pub token_type: String,
}

impl AuthBody {
    /// Creates a new authentication response.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::Utc;
    /// use paygate_auth::auth_body::AuthBody;
    ///
    /// let body = AuthBody::new("some_token".to_string(), Utc::now());
    /// assert_eq!(body.token_type, "Bearer");
    /// ```
    pub fn new(access_token: String, expires: DateTime<Utc>) -> Self {
        Self {
            access_token,
            expires,
            token_type: String::from(TOKEN_TYPE),
        }
    }
}
