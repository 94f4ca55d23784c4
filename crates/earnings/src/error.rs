// File: crates/earnings/src/error.rs
// Summary: Error types for loading monthly data and reading configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// The data source could not deliver records (network, HTTP, decoding).
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// A year must contain exactly one record per calendar month.
    #[error("expected {expected} monthly records, got {found}")]
    InvalidRecordCount { expected: usize, found: usize },

    /// Records must be in calendar order starting at January.
    #[error("record {position} is for {found}, expected {expected}")]
    MonthOutOfOrder {
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// A record lacks a value that has to be charted.
    #[error("record {position} is missing `{field}`")]
    MissingField { position: usize, field: &'static str },

    /// A record is present but cannot be read (wrong type, unknown month).
    #[error("record {position} is invalid: {reason}")]
    InvalidRecord { position: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
