//! Web workflows and middleware for the paygate service.
//!
//! Provides the authentication and access-gate workflows over the
//! repository traits, request context plumbing for axum handlers, and
//! the HTTP error mapping used by the service binary.

pub mod auth_token;
pub mod ctx;
pub mod error;
pub mod mw_auth;
pub mod prelude;
pub mod salary;
pub mod user;
