//! Domain-level errors.
//!
//! The fixed failure taxonomy returned by the application services and
//! repository engines. Transport adapters translate these into
//! protocol-specific status codes; nothing else ever crosses the boundary.

use thiserror::Error;

/// Classified failure kinds for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or constraint-violating input
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Caller is not the owner of the resource
    #[error("forbidden")]
    Forbidden,

    /// No such entity
    #[error("not found: {0}")]
    NotFound(String),

    /// Delete attempted by a non-owner; distinct from [`DomainError::Forbidden`]
    /// so callers can tell a refused delete from other authorization failures
    #[error("not deleted: requester does not own the ad")]
    NotDeleted,

    /// Unexpected failure inside a store or engine
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        DomainError::BadRequest(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        DomainError::NotFound(what.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
