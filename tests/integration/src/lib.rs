//! Integration tests for GAV request signing.
//!
//! These tests play both roles in-process: a client signs requests and a
//! server verifies them through a shared [`SigningContext`].
//!
//! Run them with:
//! ```text
//! cargo test -p gav-integration
//! ```

use std::sync::Once;

use gav_auth::{SigningContext, StaticCredentialProvider};
use gav_core::GavConfig;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing (once).
///
/// Uses `RUST_LOG` if set, otherwise the `LOG_LEVEL` config value.
pub fn init_tracing() {
    INIT.call_once(|| {
        let config = GavConfig::from_env();
        let rust_log = std::env::var("RUST_LOG").ok();
        tracing_subscriber::fmt()
            .with_env_filter(log_filter(rust_log.as_deref(), &config.log_level))
            .with_test_writer()
            .init();
    });
}

/// Pick the log filter: `rust_log` when it parses, then `log_level`, then `warn`.
#[must_use]
pub fn log_filter(rust_log: Option<&str>, log_level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(log_level).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Principals and secrets known to the test server.
pub const PRINCIPALS: &[(&str, &[u8])] = &[
    ("123", b"abcde"),
    ("build-agent", b"a much longer shared secret value"),
    ("svc 7", b"\x00\x01binary\xffsecret"),
];

/// Build an unsigned request.
#[must_use]
pub fn request(method: &str, uri: &str) -> http::request::Parts {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(())
        .expect("test request must be valid")
        .into_parts()
        .0
}

/// Build a request signed by `principal` with `secret`.
#[must_use]
pub fn signed_request(
    ctx: &SigningContext,
    method: &str,
    uri: &str,
    principal: &str,
    secret: &[u8],
    body: &[u8],
) -> http::request::Parts {
    init_tracing();

    let mut parts = request(method, uri);
    ctx.sign(&mut parts, principal, secret, body)
        .expect("signing must succeed");
    parts
}

/// Secret store holding every entry of [`PRINCIPALS`].
#[must_use]
pub fn credential_provider() -> StaticCredentialProvider {
    StaticCredentialProvider::new(
        PRINCIPALS
            .iter()
            .map(|(id, secret)| ((*id).to_owned(), secret.to_vec())),
    )
}

mod test_concurrency;
mod test_config;
mod test_freshness;
