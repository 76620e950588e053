//! Content digest of the request body.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use md5::{Digest, Md5};

/// Compute the `Content-MD5` value for a request body.
///
/// Returns the base64 encoding of the body's MD5 digest, or an empty string
/// when the body is empty: an empty body has no digest, rather than the digest
/// of nothing.
///
/// # Examples
///
/// ```
/// use gav_auth::digest::content_digest;
///
/// assert_eq!(content_digest(b""), "");
/// assert_eq!(content_digest(b"hello"), "XUFAKrxLKna5cZ2REBfFkg==");
/// ```
#[must_use]
pub fn content_digest(body: &[u8]) -> String {
    if body.is_empty() {
        return String::new();
    }
    BASE64.encode(Md5::digest(body))
}
