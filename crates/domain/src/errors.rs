use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid record id: {0}")]
    InvalidRecordId(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Transport timeout fetching {url}")]
    TransportTimeout { url: String },

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Invalid catalog response: {0}")]
    InvalidResponse(String),

    #[error("Static catalog error: {0}")]
    StaticCatalog(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Network errors, timeouts and non-2xx answers. A body that arrived but
    /// failed to parse is not a transport failure and is never retried.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. } | DomainError::TransportFailure(_)
        )
    }
}

/// Outcome of a failed single-record lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}
