//! Error types for the GAV core.

/// Core error type for GAV infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum GavError {
    /// The principal identifier cannot be carried in a credential token.
    #[error("invalid principal identifier: {0:?} (must be non-empty visible ASCII without ':')")]
    InvalidPrincipal(String),
}

/// Convenience result type for GAV operations.
pub type GavResult<T> = Result<T, GavError>;
