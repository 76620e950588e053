//! Canonical form of a signed request.
//!
//! The canonical form is the exact string fed to the HMAC. Signer and
//! verifier must build it identically, so its layout is part of the protocol:
//!
//! ```text
//! HTTPRequestMethod\n
//! Path\n
//! ContentDigest\n
//! Timestamp\n
//! PrincipalId
//! ```
//!
//! Fields appear in this order, separated by a single `\n` with no trailing
//! delimiter. `\n` cannot occur in a method token, a URI path, the base64
//! alphabet or an HTTP date; principal identifiers are validated to exclude it
//! (see [`gav_core::PrincipalId`]). Only the URI path participates; the query
//! string and headers other than the digest and timestamp are not signed.

use crate::headers::{CONTENT_MD5, header_str};
use crate::timestamp::raw_timestamp;

/// Separator between canonical form fields.
pub const CANONICAL_DELIMITER: char = '\n';

/// Build the canonical form from its five fields.
///
/// # Examples
///
/// ```
/// use gav_auth::canonical::build_canonical_form;
///
/// let canonical = build_canonical_form(
///     "POST",
///     "/test",
///     "XUFAKrxLKna5cZ2REBfFkg==",
///     "Sun, 06 Nov 1994 08:49:37 GMT",
///     "123",
/// );
/// assert_eq!(
///     canonical,
///     "POST\n/test\nXUFAKrxLKna5cZ2REBfFkg==\nSun, 06 Nov 1994 08:49:37 GMT\n123"
/// );
/// ```
#[must_use]
pub fn build_canonical_form(
    method: &str,
    path: &str,
    content_digest: &str,
    timestamp: &str,
    principal: &str,
) -> String {
    let mut canonical = String::with_capacity(
        method.len() + path.len() + content_digest.len() + timestamp.len() + principal.len() + 4,
    );
    for (i, field) in [method, path, content_digest, timestamp, principal]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            canonical.push(CANONICAL_DELIMITER);
        }
        canonical.push_str(field);
    }
    canonical
}

/// Build the canonical form of a request as a verifier sees it.
///
/// Method and path come from `parts`, the digest is the `Content-MD5` header
/// and the timestamp is the raw `Timestamp` (or fallback `Date`) header value.
/// Nothing in `parts` is modified.
#[must_use]
pub fn canonical_form_for_request(parts: &http::request::Parts, principal: &str) -> String {
    build_canonical_form(
        parts.method.as_str(),
        parts.uri.path(),
        header_str(parts, CONTENT_MD5),
        raw_timestamp(parts).unwrap_or(""),
        principal,
    )
}
