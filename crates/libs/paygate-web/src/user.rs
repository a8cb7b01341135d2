//! User registration workflow and its request/response types.

use chrono::NaiveDate;
use paygate_models::db::connection::DbConnection;
use paygate_models::salary::SalaryCreate;
use paygate_models::user::UserDirectory;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserPost {
    /// Display name, 1-50 characters.
    pub name: String,
    /// Login, 1-20 characters, unique regardless of letter case.
    pub login: String,
    /// Plaintext password, 1-10 characters. Hashed before storage.
    pub password: String,
    /// Salary fields stored alongside the new user.
    pub salary: SalaryPost,
}

/// Salary fields accompanying a registration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SalaryPost {
    /// Salary amount.
    pub value: i32,
    /// Date the amount applies to.
    pub target_date: NaiveDate,
}

/// Generic response body for state-changing routes.
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiResponse {
    /// Whether the operation succeeded.
    pub status: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Optional payload.
    pub data: Vec<serde_json::Value>,
}

impl ApiResponse {
    /// Creates a successful response with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Vec::new(),
        }
    }
}

const NAME_MAX: usize = 50;
const LOGIN_MAX: usize = 20;
const PASSWORD_MAX: usize = 10;

fn validate(payload: &UserPost) -> Result<()> {
    if payload.name.is_empty() || payload.name.len() > NAME_MAX {
        return Err(Error::Validation("name must be 1-50 characters"));
    }
    if payload.login.is_empty() || payload.login.len() > LOGIN_MAX {
        return Err(Error::Validation("login must be 1-20 characters"));
    }
    if payload.password.is_empty() || payload.password.len() > PASSWORD_MAX {
        return Err(Error::Validation("password must be 1-10 characters"));
    }
    Ok(())
}

/// Registers a new user together with their salary record.
///
/// Occupied logins are rejected, case-insensitively, before anything is
/// written.
pub fn create_user(payload: UserPost, connection: &DbConnection) -> Result<ApiResponse> {
    validate(&payload)?;

    if connection.exists(&payload.login)? {
        return Err(Error::LoginAlreadyExists(payload.login));
    }

    let user = connection.register(&payload.name, &payload.login, &payload.password)?;
    SalaryCreate {
        value: payload.salary.value,
        target_date: payload.salary.target_date,
        user_id: user.id,
    }
    .upsert(connection)?;

    Ok(ApiResponse::new("User and salary info is was added."))
}
