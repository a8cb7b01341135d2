//! Access token model and store operations.
//!
//! A user owns at most one token row. Expiry is a computed predicate, not
//! a stored state: nothing sweeps expired rows, they are replaced lazily
//! the next time issuance runs for that user.

use chrono::{DateTime, TimeDelta, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::prelude::*;
use crate::schema::tokens::dsl::*;

/// How long an issued token stays valid.
pub const TOKEN_TTL: TimeDelta = TimeDelta::minutes(5);

/// An issued access token.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::tokens)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Token {
    /// Row ID.
    pub id: i32,
    /// Opaque bearer secret, unique across all tokens.
    pub value: String,
    /// Instant after which the token is no longer accepted.
    pub expires_at: DateTime<Utc>,
    /// The user this token authenticates.
    pub user_id: i32,
}

/// Data for inserting a new token row.
#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::tokens)]
pub struct TokenCreate {
    /// Opaque bearer secret.
    pub value: String,
    /// Expiry instant.
    pub expires_at: DateTime<Utc>,
    /// Owning user.
    pub user_id: i32,
}

impl Token {
    /// Whether the token is still accepted at `now`.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Repository interface over access tokens.
///
/// Implementations supply the storage primitives; [`TokenStore::issue`]
/// carries the lifecycle policy and is written once so the
/// delete-then-recreate rule cannot diverge between backends.
pub trait TokenStore {
    /// Returns the token row for a user without filtering by validity.
    fn find_by_user(&self, target: i32) -> Result<Option<Token>>;

    /// Reverse lookup by exact token value, case-sensitive.
    fn find_user_by_token(&self, target: &str) -> Result<Option<i32>>;

    /// Inserts a new token row.
    fn insert_token(&self, token: TokenCreate) -> Result<Token>;

    /// Deletes the row with the given value. Not an error when absent.
    fn revoke(&self, target: &str) -> Result<()>;

    /// Issues a token for a user.
    ///
    /// A token that is still valid at `now` is returned untouched, expiry
    /// not extended. An expired row is deleted and replaced with a fresh
    /// value expiring [`TOKEN_TTL`] from `now`. Callers pass
    /// `Utc::now()` in production and fixed instants in tests.
    fn issue(&self, target: i32, now: DateTime<Utc>) -> Result<Token> {
        if let Some(existing) = self.find_by_user(target)? {
            if existing.is_valid(now) {
                return Ok(existing);
            }
            self.revoke(&existing.value)?;
        }
        self.insert_token(TokenCreate {
            value: Uuid::new_v4().to_string(),
            expires_at: now + TOKEN_TTL,
            user_id: target,
        })
    }
}

impl TokenStore for DbConnection {
    fn find_by_user(&self, target: i32) -> Result<Option<Token>> {
        let conn = &mut self.pool.get()?;

        Ok(tokens
            .filter(user_id.eq(target))
            .select(Token::as_select())
            .first(conn)
            .optional()?)
    }

    fn find_user_by_token(&self, target: &str) -> Result<Option<i32>> {
        let conn = &mut self.pool.get()?;

        Ok(tokens
            .filter(value.eq(target))
            .select(user_id)
            .first::<i32>(conn)
            .optional()?)
    }

    fn insert_token(&self, token: TokenCreate) -> Result<Token> {
        let conn = &mut self.pool.get()?;

        Ok(diesel::insert_into(tokens)
            .values(&token)
            .returning(Token::as_returning())
            .get_result(conn)?)
    }

    fn revoke(&self, target: &str) -> Result<()> {
        let conn = &mut self.pool.get()?;

        diesel::delete(tokens.filter(value.eq(target))).execute(conn)?;
        Ok(())
    }
}
