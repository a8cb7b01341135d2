//! Request context for authenticated handlers.
//!
//! The context resolver middleware stores the access-gate outcome in the
//! request extensions; [`ActiveUser`] extracts it again in handlers.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

pub mod resolver;

/// The authenticated principal resolved from a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveUser {
    /// Unique user ID.
    pub id: i32,
    /// Display name.
    pub name: String,
}

impl<S: Send + Sync> FromRequestParts<S> for ActiveUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<Result<ActiveUser>>()
            .ok_or(Error::CtxMissing)?
            .clone()
    }
}
