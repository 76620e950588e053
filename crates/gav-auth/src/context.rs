//! The signing context shared by signers and verifiers.
//!
//! A [`SigningContext`] carries the freshness window and runs the full
//! verification pipeline. It is immutable once built, so a single instance
//! (typically behind an `Arc`) can serve any number of concurrent calls.

use std::time::Duration;

use gav_core::{GavConfig, PrincipalId};
use tracing::debug;

use crate::credentials::CredentialProvider;
use crate::digest::content_digest;
use crate::error::AuthError;
use crate::headers::{CONTENT_MD5, header_str};
use crate::signature::{compare_signature, get_principal, get_signature, sign_request};
use crate::timestamp::{raw_timestamp, stamp_timestamp, validate_timestamp};

/// Default freshness window: 15 minutes.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(15 * 60);

/// The result of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// The principal that signed the request.
    pub principal_id: PrincipalId,
    /// The raw timestamp the request was signed with.
    pub timestamp: String,
}

/// Freshness window plus the operations that depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningContext {
    window: Duration,
}

impl Default for SigningContext {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

#[allow(clippy::unused_self)]
impl SigningContext {
    /// Create a context with the given freshness window.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidWindow`] if `window` is zero.
    pub fn new(window: Duration) -> Result<Self, AuthError> {
        if window.is_zero() {
            return Err(AuthError::InvalidWindow);
        }
        Ok(Self { window })
    }

    /// Create a context from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidWindow`] if the configured window is zero.
    pub fn from_config(config: &GavConfig) -> Result<Self, AuthError> {
        Self::new(config.time_window())
    }

    /// The freshness window.
    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Sign a request in place. See [`sign_request`].
    ///
    /// # Errors
    ///
    /// See [`sign_request`].
    pub fn sign(
        &self,
        parts: &mut http::request::Parts,
        principal: &str,
        secret: &[u8],
        body: &[u8],
    ) -> Result<(), AuthError> {
        sign_request(parts, principal, secret, body)
    }

    /// Stamp the request with the current time. See [`stamp_timestamp`].
    ///
    /// # Errors
    ///
    /// See [`stamp_timestamp`].
    pub fn stamp(&self, parts: &mut http::request::Parts) -> Result<String, AuthError> {
        stamp_timestamp(parts)
    }

    /// Validate the request timestamp against this context's window.
    ///
    /// # Errors
    ///
    /// See [`validate_timestamp`].
    pub fn validate_timestamp(&self, parts: &http::request::Parts) -> Result<String, AuthError> {
        validate_timestamp(parts, self.window)
    }

    /// Principal named by the credential token. See [`get_principal`].
    ///
    /// # Errors
    ///
    /// See [`get_principal`].
    pub fn principal(&self, parts: &http::request::Parts) -> Result<String, AuthError> {
        get_principal(parts)
    }

    /// Signature claimed by the credential token. See [`get_signature`].
    ///
    /// # Errors
    ///
    /// See [`get_signature`].
    pub fn signature(&self, parts: &http::request::Parts) -> Result<String, AuthError> {
        get_signature(parts)
    }

    /// Compare a claimed signature with the recomputed one. See [`compare_signature`].
    ///
    /// # Errors
    ///
    /// See [`compare_signature`].
    pub fn compare_signature(
        &self,
        parts: &http::request::Parts,
        provided: &str,
        secret: &[u8],
        body: &[u8],
    ) -> Result<(), AuthError> {
        compare_signature(parts, provided, secret, body)
    }

    /// Verify a signed request.
    ///
    /// Runs four checks in order and stops at the first failure:
    ///
    /// 1. The timestamp is inside the freshness window.
    /// 2. The `Content-MD5` header matches the digest of `body`.
    /// 3. The credential token carries a signature.
    /// 4. That signature matches the one recomputed with `secret`.
    ///
    /// # Errors
    ///
    /// - [`AuthError::TimestampMissing`], [`AuthError::TimestampParse`] or
    ///   [`AuthError::TimestampRange`] from step 1.
    /// - [`AuthError::Md5Mismatch`] from step 2.
    /// - [`AuthError::TokenMissingParm`] or [`AuthError::TokenIncomplete`] from step 3.
    /// - [`AuthError::SecretInvalid`] or [`AuthError::SignatureInvalid`] from step 4.
    pub fn confirm_signature(
        &self,
        parts: &http::request::Parts,
        secret: &[u8],
        body: &[u8],
    ) -> Result<(), AuthError> {
        self.validate_timestamp(parts)?;

        if header_str(parts, CONTENT_MD5) != content_digest(body) {
            debug!("Content-MD5 does not match request body");
            return Err(AuthError::Md5Mismatch);
        }

        let signature = get_signature(parts)?;
        compare_signature(parts, &signature, secret, body)
    }

    /// Authenticate a request, resolving the secret through `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenMissingParm`] or [`AuthError::TokenIncomplete`]
    /// if no principal can be read, [`AuthError::InvalidPrincipal`] if it is not
    /// a usable identifier, [`AuthError::PrincipalNotFound`] if the
    /// provider does not know it, and otherwise any error of
    /// [`confirm_signature`](Self::confirm_signature).
    pub fn authenticate(
        &self,
        parts: &http::request::Parts,
        body: &[u8],
        provider: &dyn CredentialProvider,
    ) -> Result<AuthResult, AuthError> {
        let principal_id = PrincipalId::new(get_principal(parts)?)?;
        debug!(principal = %principal_id, "Verifying request signature");

        let secret = provider.get_secret(principal_id.as_str())?;
        self.confirm_signature(parts, &secret, body)?;
        let timestamp = raw_timestamp(parts).unwrap_or_default().to_owned();

        debug!(principal = %principal_id, "Signature verification succeeded");
        Ok(AuthResult {
            principal_id,
            timestamp,
        })
    }
}
