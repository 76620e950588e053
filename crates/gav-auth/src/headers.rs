//! Header names that make up the authentication contract.
//!
//! These names are fixed by the protocol: a signer and a verifier must agree
//! on them, so they are not configurable.

/// Freshness timestamp written by the signer.
pub const TIMESTAMP: &str = "timestamp";

/// Generic date header, consulted only when [`TIMESTAMP`] is absent or empty.
pub const FALLBACK_DATE: &str = "date";

/// Base64 MD5 digest of the request body.
pub const CONTENT_MD5: &str = "content-md5";

/// Credential token, `<principal>:<signature>`.
pub const CREDENTIAL_TOKEN: &str = "authorization";

/// Read a header as a string, returning `""` when it is absent or not
/// visible ASCII.
pub(crate) fn header_str<'a>(parts: &'a http::request::Parts, name: &str) -> &'a str {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
