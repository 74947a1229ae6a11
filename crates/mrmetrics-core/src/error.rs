//! Shared error type across mrmetrics crates.

use thiserror::Error;

/// Stable error codes, used in log fields and by callers that branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A gauge value could not be read as an integer.
    Coercion,
    /// The dispatcher met a metric kind it has no handler for.
    UnsupportedKind,
    /// The counter sink rejected a lookup or write.
    Sink,
    /// Invalid input (names, config, registry conflicts).
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorKind {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Coercion => "COERCION",
            ErrorKind::UnsupportedKind => "UNSUPPORTED_KIND",
            ErrorKind::Sink => "SINK",
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and reporter.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("cannot coerce to i64: {0}")]
    Coercion(String),
    #[error("unsupported metric kind: {0}")]
    UnsupportedKind(String),
    #[error("sink rejected write: {0}")]
    Sink(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsError {
    /// Map the error to its stable code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetricsError::Coercion(_) => ErrorKind::Coercion,
            MetricsError::UnsupportedKind(_) => ErrorKind::UnsupportedKind,
            MetricsError::Sink(_) => ErrorKind::Sink,
            MetricsError::BadRequest(_) => ErrorKind::BadRequest,
            MetricsError::UnsupportedVersion => ErrorKind::UnsupportedVersion,
            MetricsError::Internal(_) => ErrorKind::Internal,
        }
    }
}
