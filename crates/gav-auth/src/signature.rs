//! Request signing and signature checks.
//!
//! The signature is `Base64(HMAC-SHA256(secret, CanonicalForm))` and travels
//! in the `Authorization` header as a credential token:
//!
//! ```text
//! Authorization: <PrincipalId>:<Signature>
//! ```
//!
//! Whitespace around either side of the colon is tolerated on read.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use gav_core::PrincipalId;
use hmac::{Hmac, KeyInit, Mac};
use http::HeaderValue;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::{build_canonical_form, canonical_form_for_request};
use crate::digest::content_digest;
use crate::error::AuthError;
use crate::headers::{CONTENT_MD5, CREDENTIAL_TOKEN, header_str};
use crate::timestamp::stamp_timestamp;

type HmacSha256 = Hmac<Sha256>;

/// Compute the signature of a canonical form: Base64(HMAC-SHA256(secret, canonical)).
///
/// # Examples
///
/// ```
/// use gav_auth::signature::compute_signature;
///
/// let signature = compute_signature(
///     b"abcde",
///     "POST\n/test\nXUFAKrxLKna5cZ2REBfFkg==\nSun, 06 Nov 1994 08:49:37 GMT\n123",
/// );
/// assert_eq!(signature, "Tnx0I1cy8z+luuhUJrcCkCkZKdN18RPdcmzmasQN6rc=");
/// ```
#[must_use]
pub fn compute_signature(secret: &[u8], canonical: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can accept keys of any length");
    mac.update(canonical.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Sign a request in place.
///
/// Writes three headers and nothing else: `Timestamp` (now), `Content-MD5`
/// (digest of `body`) and `Authorization` (`<principal>:<signature>`).
///
/// # Errors
///
/// Returns [`AuthError::SecretInvalid`] if `secret` is empty, or
/// [`AuthError::InvalidPrincipal`] if `principal` cannot be carried in the
/// credential token. Both are checked before any header is touched.
pub fn sign_request(
    parts: &mut http::request::Parts,
    principal: &str,
    secret: &[u8],
    body: &[u8],
) -> Result<(), AuthError> {
    if secret.is_empty() {
        return Err(AuthError::SecretInvalid);
    }
    let principal = PrincipalId::new(principal)?;

    let digest = content_digest(body);
    let digest_value = HeaderValue::from_str(&digest)
        .map_err(|_| AuthError::InvalidHeaderValue(CONTENT_MD5))?;

    let timestamp = stamp_timestamp(parts)?;
    parts.headers.insert(CONTENT_MD5, digest_value);

    let canonical = build_canonical_form(
        parts.method.as_str(),
        parts.uri.path(),
        &digest,
        &timestamp,
        principal.as_str(),
    );
    let signature = compute_signature(secret, &canonical);

    let token = HeaderValue::from_str(&format!("{principal}:{signature}"))
        .map_err(|_| AuthError::InvalidPrincipal(principal.to_string()))?;
    parts.headers.insert(CREDENTIAL_TOKEN, token);

    debug!(
        principal = %principal,
        method = %parts.method,
        path = parts.uri.path(),
        "Signed request"
    );
    Ok(())
}

/// Split a credential token into its trimmed principal and signature.
///
/// Only the first colon separates the two parts.
///
/// # Errors
///
/// Returns [`AuthError::TokenMissingParm`] for an empty token, or
/// [`AuthError::TokenIncomplete`] if there is no colon.
///
/// # Examples
///
/// ```
/// use gav_auth::signature::parse_credential_token;
///
/// assert_eq!(
///     parse_credential_token(" 12345 : abcde ").unwrap(),
///     ("12345", "abcde")
/// );
/// ```
pub fn parse_credential_token(token: &str) -> Result<(&str, &str), AuthError> {
    if token.is_empty() {
        return Err(AuthError::TokenMissingParm);
    }
    let (principal, signature) = token.split_once(':').ok_or(AuthError::TokenIncomplete)?;
    Ok((principal.trim(), signature.trim()))
}

/// Extract the principal identifier from the credential token.
///
/// # Errors
///
/// Returns [`AuthError::TokenMissingParm`] if the `Authorization` header is
/// absent or empty, or [`AuthError::TokenIncomplete`] if it has no colon.
pub fn get_principal(parts: &http::request::Parts) -> Result<String, AuthError> {
    let (principal, _) = parse_credential_token(header_str(parts, CREDENTIAL_TOKEN))?;
    Ok(principal.to_owned())
}

/// Extract the claimed signature from the credential token.
///
/// # Errors
///
/// Same as [`get_principal`].
pub fn get_signature(parts: &http::request::Parts) -> Result<String, AuthError> {
    let (_, signature) = parse_credential_token(header_str(parts, CREDENTIAL_TOKEN))?;
    Ok(signature.to_owned())
}

/// Check `provided` against the signature recomputed from the request.
///
/// The expected signature is computed as in [`sign_request`], but from the
/// headers already present: the principal from the credential token, the
/// `Content-MD5` header and the raw timestamp header. `body` is not part of
/// the comparison; [`SigningContext::confirm_signature`] checks it against
/// `Content-MD5` first. The request is not modified. The comparison runs in
/// constant time.
///
/// [`SigningContext::confirm_signature`]: crate::SigningContext::confirm_signature
///
/// # Errors
///
/// - [`AuthError::SecretInvalid`] if `secret` is empty.
/// - [`AuthError::TokenMissingParm`] / [`AuthError::TokenIncomplete`] if the
///   principal cannot be read.
/// - [`AuthError::SignatureInvalid`] if the signatures differ.
pub fn compare_signature(
    parts: &http::request::Parts,
    provided: &str,
    secret: &[u8],
    body: &[u8],
) -> Result<(), AuthError> {
    if secret.is_empty() {
        return Err(AuthError::SecretInvalid);
    }
    let principal = get_principal(parts)?;
    let canonical = canonical_form_for_request(parts, &principal);
    let expected = compute_signature(secret, &canonical);

    if provided.as_bytes().ct_eq(expected.as_bytes()).into() {
        Ok(())
    } else {
        debug!(
            principal = %principal,
            body_matches_digest = header_str(parts, CONTENT_MD5) == content_digest(body),
            "Signature mismatch"
        );
        Err(AuthError::SignatureInvalid)
    }
}
