//! Error types for the Paygate Service.

/// Errors that can occur while bootstrapping or running the service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
