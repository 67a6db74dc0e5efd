//! Crate-level error types.
//!
//! [`VantageError`] unifies every error source (configuration, transport,
//! upstream error payloads, tabular decoding) behind a single enum so
//! callers can match on the variant they care about while still using the
//! `?` operator for easy propagation.
//!
//! Every variant is terminal to the call that produced it: the client never
//! retries and never returns partial results alongside an error.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VantageError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum VantageError {
    /// A required configuration value was missing or empty.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP request could not be issued (connection, DNS, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream returned a non-200 HTTP status. The raw body is kept as
    /// diagnostic text and not interpreted further.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Reading the response body stream failed after a 200 status.
    #[error("error reading from response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The upstream reported an application-level error inside an HTTP 200
    /// response (`{"Error Message": ...}`), e.g. a bad symbol or an exceeded
    /// call quota. Carries the upstream message verbatim.
    #[error("{0}")]
    Api(String),

    /// The tabular body could not be tokenized at all, even with the lenient
    /// reader settings.
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row had fewer columns than the record shape requires.
    #[error("row {row:?} has {columns} columns, expected at least 6")]
    ShortRow { row: String, columns: usize },

    /// A numeric field in a data row failed to parse. Names the logical
    /// field (open/high/low/close/volume) and carries the offending row.
    #[error("error parsing {field} in row {row:?}")]
    Field { field: &'static str, row: String },
}
