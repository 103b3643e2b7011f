// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Variants carry plain strings so errors stay `Clone` and can travel inside
//! Iced messages (fetch results, transfer completions).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),

    /// The key-value session store could not be read or written.
    #[error("session store error: {0}")]
    Store(String),

    /// Transport failure or a non-success HTTP status.
    #[error("network error: {0}")]
    Network(String),

    /// A payload arrived but did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    #[error("unknown storage provider: {0}")]
    InvalidProvider(String),
}

impl Error {
    /// Returns the i18n message key used when this error reaches the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Store(_) => "error-store",
            Error::Network(_) => "error-network",
            Error::Decode(_) => "error-decode",
            Error::InvalidProvider(_) => "error-invalid-provider",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
