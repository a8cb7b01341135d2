//! Context resolver for extracting the acting user from HTTP requests.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use paygate_auth::auth_body::AuthBody;
use paygate_models::db::connection::DbConnection;
use tower_cookies::{Cookie, Cookies};

use crate::auth_token::resolve_active_user;
use crate::prelude::*;

/// The name of the cookie used to store authentication tokens.
pub const AUTH_TOKEN_COOKIE: &str = "auth-token";

/// Prefix of an `Authorization` header value carrying a bearer token.
pub const AUTH_HEADER_PREFIX: &str = "Bearer ";

/// Middleware for resolving the request context from a bearer token.
///
/// Extracts the token from the auth cookie or the `Authorization`
/// header, runs the access gate against the database, and adds the
/// outcome to the request extensions. A failed resolution also clears
/// the cookie.
///
/// # Examples
///
/// ```rust,no_run
/// use axum::{Router, middleware};
/// use paygate_models::db::{config::DbConfig, connection::DbConnection};
/// use paygate_web::ctx::resolver::mw_ctx_resolver;
///
/// let db = DbConnection::new(&DbConfig::from_env());
/// let app: Router<()> = Router::new()
///     .layer(middleware::from_fn_with_state(db.clone(), mw_ctx_resolver));
/// ```
pub async fn mw_ctx_resolver(
    State(db): State<DbConnection>,
    cookies: Cookies,
    headers: HeaderMap,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let cookie_token = cookies
        .get(AUTH_TOKEN_COOKIE)
        .map(|c| c.value().to_string());

    let ctx = token_from_request(cookie_token, &headers)
        .and_then(|token_value| resolve_active_user(&db, &token_value, Utc::now()));

    if ctx.is_err() {
        cookies.remove(Cookie::from(AUTH_TOKEN_COOKIE));
    }
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

/// Stores the issued token in the auth cookie after a successful login,
/// so browser clients stay authenticated without replaying the header.
pub fn remember_token(body: &AuthBody, cookies: &Cookies) {
    cookies.add(Cookie::new(AUTH_TOKEN_COOKIE, body.access_token.clone()));
}

fn token_from_request(cookie_token: Option<String>, headers: &HeaderMap) -> Result<String> {
    cookie_token
        .or_else(|| {
            headers
                .get(AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.strip_prefix(AUTH_HEADER_PREFIX))
                .map(|s| s.to_string())
        })
        .ok_or(Error::MissingCredentials)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn bearer_header_is_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer some-token"));

        assert_eq!(
            token_from_request(None, &headers).unwrap(),
            "some-token"
        );
    }

    #[test]
    fn cookie_takes_precedence_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));

        let token = token_from_request(Some(String::from("from-cookie")), &headers).unwrap();
        assert_eq!(token, "from-cookie");
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let headers = HeaderMap::new();

        let err = token_from_request(None, &headers).unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
    }

    #[test]
    fn non_bearer_authorization_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));

        let err = token_from_request(None, &headers).unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
    }
}
