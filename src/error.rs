//! Error types for the boundary layers
//!
//! The simulation itself never fails; only configuration loading and browser
//! startup can.

use thiserror::Error;

/// Configuration could not be parsed or holds unusable values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Fatal failure while wiring the game into the page
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no global `{0}` available")]
    MissingGlobal(&'static str),

    #[error("element `#{0}` not found")]
    MissingElement(&'static str),

    #[error("element `#{0}` is not a canvas")]
    NotACanvas(&'static str),

    #[error("2d canvas context unavailable")]
    NoContext,

    #[error("failed to load asset {path}: {message}")]
    Asset { path: &'static str, message: String },

    #[error("javascript error: {0}")]
    Js(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
