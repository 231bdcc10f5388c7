//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. The
//! descriptors only fail synchronously while being built or mutated, and always because
//! an argument was missing or out of range.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl Error {
    /// Shorthand for an [`Error::InvalidArgument`] raised by a missing required value.
    pub(crate) fn missing(name: &'static str) -> Self {
        Error::InvalidArgument {
            name,
            reason: "value is required".to_owned(),
        }
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
