//! Request freshness.
//!
//! A signer stamps each request with the current UTC time in the `Timestamp`
//! header. A verifier accepts the request only when that time (or the `Date`
//! header, if no `Timestamp` was sent) lies within the freshness window of its
//! own clock. Skew in either direction counts the same, which bounds how long
//! a captured request can be replayed.

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use http::HeaderValue;
use tracing::debug;

use crate::error::AuthError;
use crate::headers::{FALLBACK_DATE, TIMESTAMP, header_str};

/// IMF-fixdate, the preferred HTTP date format: `Sun, 06 Nov 1994 08:49:37 GMT`.
pub const IMF_FIXDATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Obsolete RFC 850 format: `Sunday, 06-Nov-94 08:49:37 GMT`.
pub const RFC850_DATE: &str = "%A, %d-%b-%y %H:%M:%S GMT";

/// ANSI C `asctime()` format: `Sun Nov  6 08:49:37 1994`.
pub const ASCTIME_DATE: &str = "%a %b %e %H:%M:%S %Y";

/// Format a time as an IMF-fixdate HTTP date.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use gav_auth::timestamp::format_http_date;
///
/// let t = Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap();
/// assert_eq!(format_http_date(t), "Sun, 06 Nov 1994 08:49:37 GMT");
/// ```
#[must_use]
pub fn format_http_date(time: DateTime<Utc>) -> String {
    time.format(IMF_FIXDATE).to_string()
}

/// Day names accepted in the leading weekday token.
const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Parse an HTTP date in any of the three formats HTTP/1.1 recipients accept.
///
/// The leading weekday must be a day name but is not checked against the
/// date, so `Mon, 06 Nov 1994 08:49:37 GMT` parses as a Sunday.
///
/// # Errors
///
/// Returns the parse error of the last format tried (asctime) when the value
/// matches none of them.
pub fn parse_http_date(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = parse_after_weekday(s, ", ", false, "%d %b %Y %H:%M:%S GMT", IMF_FIXDATE) {
        return Ok(dt);
    }
    if let Ok(dt) = parse_after_weekday(s, ", ", true, "%d-%b-%y %H:%M:%S GMT", RFC850_DATE) {
        return Ok(dt);
    }
    parse_after_weekday(s, " ", false, "%b %e %H:%M:%S %Y", ASCTIME_DATE)
}

/// Parse `s` as `<weekday><separator><rest>`, ignoring the weekday's value.
///
/// When the weekday token is not a day name, `full_format` is applied to the
/// whole input so the caller gets chrono's own error for it.
fn parse_after_weekday(
    s: &str,
    separator: &str,
    long_name: bool,
    rest_format: &str,
    full_format: &str,
) -> Result<DateTime<Utc>, chrono::ParseError> {
    match s.split_once(separator) {
        Some((day, rest)) if is_weekday(day, long_name) => {
            NaiveDateTime::parse_from_str(rest, rest_format).map(|dt| dt.and_utc())
        }
        _ => NaiveDateTime::parse_from_str(s, full_format).map(|dt| dt.and_utc()),
    }
}

fn is_weekday(token: &str, long_name: bool) -> bool {
    WEEKDAYS.iter().any(|&name| {
        let name = if long_name { name } else { &name[..3] };
        token.eq_ignore_ascii_case(name)
    })
}

/// Write the current UTC time into the `Timestamp` header.
///
/// Any previous `Timestamp` values are replaced. Returns the value written.
///
/// # Errors
///
/// Returns [`AuthError::InvalidHeaderValue`] if the formatted date cannot be
/// stored as a header value.
pub fn stamp_timestamp(parts: &mut http::request::Parts) -> Result<String, AuthError> {
    let stamp = format_http_date(Utc::now());
    let value = HeaderValue::from_str(&stamp)
        .map_err(|_| AuthError::InvalidHeaderValue(TIMESTAMP))?;
    parts.headers.insert(TIMESTAMP, value);
    Ok(stamp)
}

/// Return the raw timestamp a request claims: the `Timestamp` header, or the
/// `Date` header when `Timestamp` is absent or empty.
#[must_use]
pub fn raw_timestamp(parts: &http::request::Parts) -> Option<&str> {
    let stamp = header_str(parts, TIMESTAMP);
    if !stamp.is_empty() {
        return Some(stamp);
    }
    let date = header_str(parts, FALLBACK_DATE);
    (!date.is_empty()).then_some(date)
}

/// Check that a request's timestamp lies within `window` of the current time.
///
/// On success the timestamp is returned exactly as it appeared in the header,
/// so that it can take part in the canonical form byte-for-byte.
///
/// # Errors
///
/// - [`AuthError::TimestampMissing`] if neither `Timestamp` nor `Date` is set.
/// - [`AuthError::TimestampParse`] if the value is not an HTTP date.
/// - [`AuthError::TimestampRange`] if the skew exceeds `window`.
pub fn validate_timestamp(
    parts: &http::request::Parts,
    window: Duration,
) -> Result<String, AuthError> {
    let raw = raw_timestamp(parts).ok_or(AuthError::TimestampMissing)?;
    let stamped = parse_http_date(raw)?;

    let skew_minutes = skew_minutes(Utc::now(), stamped);
    let window_minutes = window.as_secs_f64() / 60.0;

    if skew_minutes > window_minutes {
        debug!(
            timestamp = raw,
            skew_minutes, window_minutes, "Request timestamp outside freshness window"
        );
        return Err(AuthError::TimestampRange {
            window_minutes,
            skew_minutes,
        });
    }

    Ok(raw.to_owned())
}

/// Absolute difference between two instants, in fractional minutes.
#[allow(clippy::cast_precision_loss)]
fn skew_minutes(now: DateTime<Utc>, stamped: DateTime<Utc>) -> f64 {
    let millis = now.signed_duration_since(stamped).num_milliseconds();
    (millis as f64 / 60_000.0).abs()
}
