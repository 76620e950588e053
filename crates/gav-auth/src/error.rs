//! Error types for request authentication.
//!
//! Every failure of the signing and verification pipeline is an
//! [`AuthError`]. The message text of each condition comes from the constants
//! below, which existing clients match on, so they must not change.

use gav_core::GavError;
use http::StatusCode;

/// Message for a credential token without a `principal:signature` pair.
pub const TOKEN_INCOMPLETE: &str = "Authorization token is incomplete.";
/// Message for an absent or empty credential token.
pub const TOKEN_MISSING_PARM: &str = "Authorization token is missing userid or hmac value";
/// Message for a body whose digest differs from the `Content-MD5` header.
pub const MD5_MISMATCH: &str = "Checksum mismatch for Content-MD5";
/// Message for a request carrying neither `Timestamp` nor `Date`.
pub const TIMESTAMP_MISSING: &str = "No date/time specified for key check";
/// Prefix of the message for a request outside the freshness window.
pub const TIMESTAMP_RANGE: &str = "Time is outside of time window";
/// Message for an empty shared secret.
pub const SECRET_INVALID: &str = "The shared secret cannot be empty";
/// Message for a signature that does not match the recomputed one.
pub const SIGNATURE_INVALID: &str = "Signature on request is invalid";

/// Errors that can occur while signing or verifying a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The credential token does not contain a `principal:signature` pair.
    #[error("{}", TOKEN_INCOMPLETE)]
    TokenIncomplete,

    /// The credential token header is absent or empty.
    #[error("{}", TOKEN_MISSING_PARM)]
    TokenMissingParm,

    /// The recomputed body digest differs from the `Content-MD5` header.
    #[error("{}", MD5_MISMATCH)]
    Md5Mismatch,

    /// Neither the `Timestamp` nor the `Date` header is present.
    #[error("{}", TIMESTAMP_MISSING)]
    TimestampMissing,

    /// The request timestamp is further from now than the freshness window.
    #[error("{} - {:.0} min. max/{:.0} in header", TIMESTAMP_RANGE, .window_minutes, .skew_minutes)]
    TimestampRange {
        /// The configured freshness window, in minutes.
        window_minutes: f64,
        /// The observed absolute skew, in minutes.
        skew_minutes: f64,
    },

    /// The request timestamp matches none of the accepted HTTP date formats.
    #[error(transparent)]
    TimestampParse(#[from] chrono::ParseError),

    /// The shared secret is empty.
    #[error("{}", SECRET_INVALID)]
    SecretInvalid,

    /// The provided signature does not match the recomputed one.
    #[error("{}", SIGNATURE_INVALID)]
    SignatureInvalid,

    /// The principal identifier cannot be carried in a credential token.
    #[error("invalid principal identifier: {0:?}")]
    InvalidPrincipal(String),

    /// A computed header value is not a valid HTTP header value.
    #[error("invalid value for header {0}")]
    InvalidHeaderValue(&'static str),

    /// The freshness window is zero.
    #[error("freshness window must be greater than zero")]
    InvalidWindow,

    /// No secret is known for the principal named in the credential token.
    #[error("principal not found: {0}")]
    PrincipalNotFound(String),
}

impl From<GavError> for AuthError {
    fn from(err: GavError) -> Self {
        match err {
            GavError::InvalidPrincipal(id) => Self::InvalidPrincipal(id),
        }
    }
}

/// Field-less discriminant of [`AuthError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    /// See [`AuthError::TokenIncomplete`].
    TokenIncomplete,
    /// See [`AuthError::TokenMissingParm`].
    TokenMissingParm,
    /// See [`AuthError::Md5Mismatch`].
    Md5Mismatch,
    /// See [`AuthError::TimestampMissing`].
    TimestampMissing,
    /// See [`AuthError::TimestampRange`].
    TimestampRange,
    /// See [`AuthError::TimestampParse`].
    TimestampParse,
    /// See [`AuthError::SecretInvalid`].
    SecretInvalid,
    /// See [`AuthError::SignatureInvalid`].
    SignatureInvalid,
    /// See [`AuthError::InvalidPrincipal`].
    InvalidPrincipal,
    /// See [`AuthError::InvalidHeaderValue`].
    InvalidHeaderValue,
    /// See [`AuthError::InvalidWindow`].
    InvalidWindow,
    /// See [`AuthError::PrincipalNotFound`].
    PrincipalNotFound,
}

impl AuthErrorKind {
    /// Suggested HTTP status for rejecting a request that failed with this kind.
    ///
    /// Malformed credentials map to `400`, failed proofs to `403`, and local
    /// misconfiguration to `500`.
    #[must_use]
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::TokenIncomplete
            | Self::TokenMissingParm
            | Self::TimestampMissing
            | Self::TimestampParse
            | Self::InvalidPrincipal => StatusCode::BAD_REQUEST,
            Self::Md5Mismatch
            | Self::TimestampRange
            | Self::SignatureInvalid
            | Self::PrincipalNotFound => StatusCode::FORBIDDEN,
            Self::SecretInvalid | Self::InvalidHeaderValue | Self::InvalidWindow => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl AuthError {
    /// Return the kind of this error.
    #[must_use]
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::TokenIncomplete => AuthErrorKind::TokenIncomplete,
            Self::TokenMissingParm => AuthErrorKind::TokenMissingParm,
            Self::Md5Mismatch => AuthErrorKind::Md5Mismatch,
            Self::TimestampMissing => AuthErrorKind::TimestampMissing,
            Self::TimestampRange { .. } => AuthErrorKind::TimestampRange,
            Self::TimestampParse(_) => AuthErrorKind::TimestampParse,
            Self::SecretInvalid => AuthErrorKind::SecretInvalid,
            Self::SignatureInvalid => AuthErrorKind::SignatureInvalid,
            Self::InvalidPrincipal(_) => AuthErrorKind::InvalidPrincipal,
            Self::InvalidHeaderValue(_) => AuthErrorKind::InvalidHeaderValue,
            Self::InvalidWindow => AuthErrorKind::InvalidWindow,
            Self::PrincipalNotFound(_) => AuthErrorKind::PrincipalNotFound,
        }
    }
}
