//! Error types shared across the crate.
//!
//! The fuzzy matcher only ever fails with [`Error::InvalidArgument`]; every
//! other variant belongs to the plumbing around it (configuration, the Spotify
//! client and the record normalizer).

use thiserror::Error;

/// Failure to turn a raw Spotify record into a typed entity.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{entity} record is missing field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("invalid timestamp `{value}`: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("request to Spotify failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0} must be set")]
    MissingConfig(&'static str),

    #[error("invalid value `{value}` for {key}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("cannot load environment: {0}")]
    Env(#[from] dotenv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
