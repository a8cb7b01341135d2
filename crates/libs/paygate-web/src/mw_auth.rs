//! Authentication middleware for protecting routes.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::ctx::ActiveUser;
use crate::prelude::*;

/// Middleware that requires authentication for a route.
///
/// Rejects the request with the context resolution error when no acting
/// user could be resolved.
///
/// # Examples
///
/// ```rust,no_run
/// use axum::{Router, routing::get};
/// use paygate_web::mw_auth::mw_require_auth;
///
/// let app: Router<()> = Router::new()
///     .route("/protected", get(protected_handler))
///     .layer(axum::middleware::from_fn(mw_require_auth));
///
/// async fn protected_handler() -> &'static str {
///     "This requires authentication"
/// }
/// ```
pub async fn mw_require_auth(
    user: Result<ActiveUser>,
    req: Request,
    next: Next,
) -> Result<Response> {
    user?;
    Ok(next.run(req).await)
}
