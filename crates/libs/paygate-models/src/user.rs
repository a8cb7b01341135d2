//! User model and directory operations.
//!
//! Logins are case-insensitively unique: lookups fold both sides with SQL
//! `lower`, and the migration backs the invariant with a unique index on
//! `LOWER(login)`.

use diesel::define_sql_function;
use diesel::prelude::*;
use diesel::sql_types::Text;
use paygate_auth::credential::{encode_credential, verify_password};
use serde::{Deserialize, Serialize};

use crate::db::connection::DbConnection;
use crate::prelude::*;
use crate::schema::users::dsl::*;

define_sql_function! {
    /// SQL `lower`, used for case-insensitive login comparisons.
    fn lower(x: Text) -> Text;
}

/// A registered user identity.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique user ID, system-assigned and stable.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Login, case-insensitively unique.
    pub login: String,
    /// Hashed credential (`hash^salt`), never plaintext.
    pub credential: String,
}

/// Data for creating a new user row.
#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::users)]
pub struct UserCreate {
    /// Display name.
    pub name: String,
    /// Login.
    pub login: String,
    /// Hashed credential produced by the credential hasher.
    pub credential: String,
}

/// Minimal `{id, name}` projection used for display and salary linkage.
#[derive(Debug, Clone, Queryable, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user ID.
    pub id: i32,
    /// Display name.
    pub name: String,
}

/// Repository interface over user identity records.
///
/// Implementations supply the four storage primitives; the credential and
/// registration policy is written once in the provided methods so it
/// cannot diverge between backends.
pub trait UserDirectory {
    /// Resolves a login to a user id, folding case on both sides.
    fn find_id_by_login(&self, target: &str) -> Result<Option<i32>>;

    /// Returns the stored credential for a login, folding case.
    fn find_credential_by_login(&self, target: &str) -> Result<Option<String>>;

    /// Inserts a new user row.
    fn insert_user(&self, user: UserCreate) -> Result<User>;

    /// Returns the `{id, name}` projection for a user, if present.
    fn fetch_profile(&self, target: i32) -> Result<Option<UserProfile>>;

    /// Whether any user owns the login, regardless of letter case.
    fn exists(&self, target: &str) -> Result<bool> {
        Ok(self.find_id_by_login(target)?.is_some())
    }

    /// Checks a login/password pair.
    ///
    /// Unknown logins verify as `false`, indistinguishable from a wrong
    /// password at this level.
    fn verify_credentials(&self, target: &str, password: &str) -> Result<bool> {
        match self.find_credential_by_login(target)? {
            Some(stored) => Ok(verify_password(password, &stored)),
            None => Ok(false),
        }
    }

    /// Registers a new user.
    ///
    /// Fails with [`Error::LoginTaken`] and no side effects when the login
    /// is already occupied. The password is hashed with a fresh salt
    /// before it is stored.
    fn register(&self, display_name: &str, user_login: &str, password: &str) -> Result<User> {
        if self.exists(user_login)? {
            return Err(Error::LoginTaken(user_login.to_string()));
        }
        self.insert_user(UserCreate {
            name: display_name.to_string(),
            login: user_login.to_string(),
            credential: encode_credential(password),
        })
    }
}

impl UserDirectory for DbConnection {
    fn find_id_by_login(&self, target: &str) -> Result<Option<i32>> {
        let conn = &mut self.pool.get()?;

        Ok(users
            .filter(lower(login).eq(target.to_lowercase()))
            .select(id)
            .first::<i32>(conn)
            .optional()?)
    }

    fn find_credential_by_login(&self, target: &str) -> Result<Option<String>> {
        let conn = &mut self.pool.get()?;

        Ok(users
            .filter(lower(login).eq(target.to_lowercase()))
            .select(credential)
            .first::<String>(conn)
            .optional()?)
    }

    fn insert_user(&self, user: UserCreate) -> Result<User> {
        let conn = &mut self.pool.get()?;

        Ok(diesel::insert_into(users)
            .values(&user)
            .returning(User::as_returning())
            .get_result(conn)?)
    }

    fn fetch_profile(&self, target: i32) -> Result<Option<UserProfile>> {
        let conn = &mut self.pool.get()?;

        Ok(users
            .filter(id.eq(target))
            .select((id, name))
            .first::<UserProfile>(conn)
            .optional()?)
    }
}
