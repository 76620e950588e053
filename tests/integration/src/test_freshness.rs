//! Freshness checks against timestamps produced by other clients.

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};
    use gav_auth::canonical::build_canonical_form;
    use gav_auth::headers::{CONTENT_MD5, CREDENTIAL_TOKEN, FALLBACK_DATE};
    use gav_auth::signature::compute_signature;
    use gav_auth::timestamp::{ASCTIME_DATE, IMF_FIXDATE, RFC850_DATE};
    use gav_auth::{AuthErrorKind, SigningContext, content_digest};
    use http::HeaderValue;

    use crate::{init_tracing, request};

    const SECRET: &[u8] = b"abcde";
    const BODY: &[u8] = b"{\"ping\":true}";

    /// Sign a request the way a client that only sets `Date` would.
    fn sign_with_date_header(date: &str) -> http::request::Parts {
        init_tracing();

        let mut parts = request("POST", "http://example.com/ping");
        let digest = content_digest(BODY);
        let canonical = build_canonical_form("POST", "/ping", &digest, date, "123");
        let signature = compute_signature(SECRET, &canonical);

        parts
            .headers
            .insert(FALLBACK_DATE, HeaderValue::from_str(date).unwrap());
        parts
            .headers
            .insert(CONTENT_MD5, HeaderValue::from_str(&digest).unwrap());
        parts.headers.insert(
            CREDENTIAL_TOKEN,
            HeaderValue::from_str(&format!(" 123 : {signature} ")).unwrap(),
        );
        parts
    }

    #[test]
    fn test_should_accept_date_header_in_every_http_format() {
        let ctx = SigningContext::default();
        let now = Utc::now();

        for format in [IMF_FIXDATE, RFC850_DATE, ASCTIME_DATE] {
            let date = now.format(format).to_string();
            let parts = sign_with_date_header(&date);
            assert!(
                ctx.confirm_signature(&parts, SECRET, BODY).is_ok(),
                "date {date:?} should verify"
            );
            assert_eq!(ctx.validate_timestamp(&parts).unwrap(), date);
        }
    }

    #[test]
    fn test_should_penalize_future_and_past_skew_alike() {
        let ctx = SigningContext::default();

        for offset in [-16, 16] {
            let date = (Utc::now() + TimeDelta::minutes(offset))
                .format(IMF_FIXDATE)
                .to_string();
            let parts = sign_with_date_header(&date);
            let err = ctx.confirm_signature(&parts, SECRET, BODY).unwrap_err();
            assert_eq!(err.kind(), AuthErrorKind::TimestampRange);
        }
    }

    #[test]
    fn test_should_surface_unparseable_date() {
        let ctx = SigningContext::default();
        let parts = sign_with_date_header("2024-01-15T10:30:00Z");

        let err = ctx.confirm_signature(&parts, SECRET, BODY).unwrap_err();
        assert_eq!(err.kind(), AuthErrorKind::TimestampParse);
    }
}
