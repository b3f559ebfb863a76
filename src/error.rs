//! Error types for loading, rendering and writing a site

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while building a site
#[derive(Error, Debug)]
pub enum Error {
    #[error("{path:?}: missing required front-matter field `{field}`")]
    MissingField { path: PathBuf, field: &'static str },

    #[error("{path:?}: unrecognized date `{value}`")]
    InvalidDate { path: PathBuf, value: String },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glob pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("glob error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("template `{name}`: {source}")]
    Template {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
