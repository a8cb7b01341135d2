//! Database models and repositories for the paygate service.
//!
//! Provides Diesel-based models, queries, and connection management for
//! users, tokens, and salary records, plus the [`user::UserDirectory`]
//! and [`token::TokenStore`] repositories the authentication workflows
//! are built on.
//!
//! # Usage
//!
//! ```rust,no_run
//! use paygate_models::db::{config::DbConfig, connection::DbConnection};
//! use paygate_models::user::UserDirectory;
//!
//! let config = DbConfig::from_env();
//! let db = DbConnection::new(&config).setup();
//!
//! let taken = db.exists("test1").unwrap();
//! println!("login taken: {taken}");
//! ```

pub mod db;
pub mod error;
pub mod prelude;
pub mod salary;
pub mod token;
pub mod user;
mod schema;
