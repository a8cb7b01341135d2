//! Main Crate Error

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::error;

/// Errors surfaced by the paygate workflows.
///
/// The enum is `Clone` so a resolution outcome can ride request
/// extensions; persistence failures are carried as their message.
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("Login not found")]
    LoginNotFound,

    #[error("Incorrect login or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Token is expired")]
    TokenExpired,

    #[error("User info not found")]
    UserNotFound,

    #[error("User with login {0} is exist")]
    LoginAlreadyExists(String),

    #[error("Salary info not found")]
    SalaryNotFound,

    #[error("{0}")]
    Validation(&'static str),

    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Context Missing")]
    CtxMissing,

    #[error("Persistence failure: {0}")]
    Persistence(String),
}

impl From<paygate_models::error::Error> for Error {
    fn from(value: paygate_models::error::Error) -> Self {
        match value {
            paygate_models::error::Error::LoginTaken(login) => Self::LoginAlreadyExists(login),
            other => Self::Persistence(other.to_string()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        error!("Creating API error response for error: {:?}", self);
        let status = match &self {
            Error::LoginNotFound | Error::InvalidCredentials | Error::SalaryNotFound => {
                StatusCode::BAD_REQUEST
            }
            Error::Unauthenticated
            | Error::TokenExpired
            | Error::MissingCredentials
            | Error::CtxMissing
            | Error::LoginAlreadyExists(_) => StatusCode::UNAUTHORIZED,
            Error::UserNotFound => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &self {
            Error::Persistence(_) => String::from("Internal server error"),
            Error::MissingCredentials | Error::CtxMissing => String::from("Not authenticated"),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "status": status.as_u16()
            }
        }));
        (status, body).into_response()
    }
}
