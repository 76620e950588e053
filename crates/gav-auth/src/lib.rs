//! Shared-secret HMAC request signing and verification.
//!
//! A client signs a request with a secret it shares with the server. The
//! server recomputes the signature and accepts the request only if the
//! signature matches, the body digest matches, and the request timestamp lies
//! within the freshness window.
//!
//! # Overview
//!
//! Signing writes three headers:
//!
//! | Header | Value |
//! |--------|-------|
//! | `Timestamp` | current UTC time as an HTTP date |
//! | `Content-MD5` | base64 MD5 of the body, empty for an empty body |
//! | `Authorization` | `<principal>:<base64 HMAC-SHA256 of the canonical form>` |
//!
//! Verification checks the timestamp, then the digest, then the signature,
//! and stops at the first failure.
//!
//! # Usage
//!
//! ```rust
//! use gav_auth::{SigningContext, StaticCredentialProvider};
//!
//! let ctx = SigningContext::default();
//! let body = b"Good morning world!";
//!
//! // Client side.
//! let (mut parts, ()) = http::Request::builder()
//!     .method("POST")
//!     .uri("http://example.com/test")
//!     .body(())
//!     .unwrap()
//!     .into_parts();
//! ctx.sign(&mut parts, "123", b"abcde", body).unwrap();
//!
//! // Server side.
//! let provider = StaticCredentialProvider::new(vec![("123".to_owned(), b"abcde".to_vec())]);
//! let result = ctx.authenticate(&parts, body, &provider).unwrap();
//! assert_eq!(result.principal_id.as_str(), "123");
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical form construction
//! - [`context`] - Freshness window and the verification pipeline
//! - [`credentials`] - Secret lookup trait and in-memory implementation
//! - [`digest`] - Body content digest
//! - [`error`] - Authentication error types
//! - [`headers`] - Header names used by the protocol
//! - [`signature`] - Signing, credential token parsing and signature comparison
//! - [`timestamp`] - Timestamp stamping and freshness validation

pub mod canonical;
pub mod context;
pub mod credentials;
pub mod digest;
pub mod error;
pub mod headers;
pub mod signature;
pub mod timestamp;

pub use context::{AuthResult, SigningContext};
pub use credentials::{CredentialProvider, StaticCredentialProvider};
pub use digest::content_digest;
pub use error::{AuthError, AuthErrorKind};
pub use signature::{compare_signature, get_principal, get_signature, sign_request};
pub use timestamp::{stamp_timestamp, validate_timestamp};
