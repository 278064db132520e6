//! Error taxonomy shared by every component.
//!
//! Each component resolves its own failures into a [`ProyektorError`]. The
//! variant decides the HTTP status at the boundary:
//!
//! - [`ProyektorError::Validation`] - malformed input, `400`
//! - [`ProyektorError::NotFound`] - unknown book, missing file, no match, `404`
//! - everything else - upstream, transport, config and io failures, `500`
//!
//! A verse missing *inside* an existing file is not an error: it is returned
//! as data (see [`crate::store::verses::VERSE_NOT_FOUND`]).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProyektorError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("upstream responded with status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),

    #[error("request to upstream failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProyektorError {
    pub fn validation(message: impl Into<String>) -> Self {
        ProyektorError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ProyektorError::NotFound(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        ProyektorError::Config(message.into())
    }

    /// HTTP status code this error maps to at the boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            ProyektorError::Validation(_) => 400,
            ProyektorError::NotFound(_) => 404,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProyektorError>;
