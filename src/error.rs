// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Everything that can go wrong in a run. Per-venue failures (the first two
/// variants, mostly) are caught at the runner loop and reported without
/// aborting the run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url}: HTTP status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("cannot read venue file {path}: {source}")]
    VenueFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed venue file {path}: {source}")]
    VenueFormat {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}
