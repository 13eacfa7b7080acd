// src/error.rs
use thiserror::Error;

/// A cell's text does not follow the expected number format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("empty number")]
    Empty,
    #[error("not a number: '{value}'")]
    Invalid { value: String },
    #[error("malformed thousands grouping: '{value}'")]
    BadGrouping { value: String },
}

/// One record could not be built. Nothing partial survives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FundError {
    #[error("field '{field}' = '{value}': {source}")]
    Field {
        field: &'static str,
        value: String,
        #[source]
        source: NumberError,
    },
}

/// Anything that aborts a scrape run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport failure, timeout, or non-success status.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("element not found: {0}")]
    MissingElement(&'static str),

    #[error("column '{0}' not found in table header")]
    MissingColumn(&'static str),

    #[error("row {row}: expected at least {expected} cells, found {found}")]
    ShortRow { row: usize, expected: usize, found: usize },

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: FundError,
    },
}
