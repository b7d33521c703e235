// src/error.rs
use thiserror::Error;

/// Extraction failures. Absence of the results table is an explicit result
/// state, not a panic; the caller decides whether to re-fetch.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("results table (class \"{marker}\") not found in document")]
    TableMissing { marker: &'static str },
}

/// Page retrieval failures, after the retry loop has given up.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("gave up on {url} after {attempts} attempts")]
    RetriesExhausted { url: String, attempts: u32 },
}
