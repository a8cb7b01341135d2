//! Authentication and access-gate workflows.
//!
//! Both workflows are generic over the repository traits so they run
//! against the PostgreSQL-backed [`DbConnection`] in production and
//! against in-memory fakes in tests. Time enters as an explicit `now`
//! parameter rather than an ambient clock.
//!
//! [`DbConnection`]: paygate_models::db::connection::DbConnection

use chrono::{DateTime, Utc};
use paygate_auth::auth_body::AuthBody;
use paygate_models::token::TokenStore;
use paygate_models::user::UserDirectory;

use crate::ctx::ActiveUser;
use crate::prelude::*;

/// Authenticates a login/password pair and returns the bearer token.
///
/// Unknown logins and wrong passwords fail with distinguishable errors,
/// in that order. A user holding a still-valid token gets that token
/// back unchanged; an expired one is replaced.
///
/// # Examples
///
/// ```rust,no_run
/// use chrono::Utc;
/// use paygate_models::db::{config::DbConfig, connection::DbConnection};
/// use paygate_web::auth_token::authenticate;
///
/// # fn example() -> paygate_web::prelude::Result<()> {
/// let db = DbConnection::new(&DbConfig::from_env());
/// let body = authenticate(&db, "test1", "pw12345", Utc::now())?;
/// println!("token {} expires {}", body.access_token, body.expires);
/// # Ok(())
/// # }
/// ```
pub fn authenticate<S>(
    store: &S,
    login: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<AuthBody>
where
    S: UserDirectory + TokenStore,
{
    if !store.exists(login)? {
        return Err(Error::LoginNotFound);
    }
    if !store.verify_credentials(login, password)? {
        return Err(Error::InvalidCredentials);
    }

    let user_id = store.find_id_by_login(login)?.ok_or(Error::LoginNotFound)?;
    let token = store.issue(user_id, now)?;

    Ok(AuthBody::new(token.value, token.expires_at))
}

/// Resolves the acting user behind a bearer token.
///
/// The reverse lookup only identifies the owner; validity is then
/// checked on the row fetched by user id, the same row issuance
/// replaces. A token row pointing at a missing user is reported as an
/// inconsistency, distinct from an unknown token.
pub fn resolve_active_user<S>(
    store: &S,
    token_value: &str,
    now: DateTime<Utc>,
) -> Result<ActiveUser>
where
    S: UserDirectory + TokenStore,
{
    let user_id = store
        .find_user_by_token(token_value)?
        .ok_or(Error::Unauthenticated)?;

    let token = store.find_by_user(user_id)?.ok_or(Error::Unauthenticated)?;
    if !token.is_valid(now) {
        return Err(Error::TokenExpired);
    }

    let profile = store.fetch_profile(user_id)?.ok_or(Error::UserNotFound)?;

    Ok(ActiveUser {
        id: user_id,
        name: profile.name,
    })
}
