//! Temporal value codec for the SQL Server dialect.
//!
//! The generic driver-to-value conversion path pads fractional seconds with
//! zeros for this dialect, so both directions here work on the driver's raw
//! column text instead: decoding parses the text directly, and encoding
//! produces text the driver binds as an nvarchar parameter (see
//! [`crate::params`] for why native temporal bindings are avoided).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Timelike};

use crate::error::MssqlAdapterError;

/// Anchor date prepended to raw TIME text before parsing.
///
/// The dialect's TIME values carry no date component but the parser requires
/// one; callers that only need the time-of-day discard this date.
pub const TIME_ANCHOR_DATE: &str = "2000-01-01";

/// Decode a driver-reported timestamp string.
///
/// `None` in means SQL NULL and decodes to `None` (absence, not a sentinel).
/// The supplied `zone` is the ORM's default offset; the driver text itself is
/// zone-less.
///
/// # Errors
///
/// Returns [`MssqlAdapterError::MalformedTemporalValue`] when the text cannot
/// be parsed as a date or date+time.
pub fn decode_timestamp(
    raw: Option<&str>,
    zone: FixedOffset,
) -> Result<Option<DateTime<FixedOffset>>, MssqlAdapterError> {
    match raw {
        None => Ok(None),
        Some(text) => parse_in_zone(text, zone).map(Some),
    }
}

/// Decode a driver-reported time-of-day string.
///
/// Prepends [`TIME_ANCHOR_DATE`] and parses as a full timestamp, so fractional
/// seconds survive exactly as reported.
///
/// # Errors
///
/// Returns [`MssqlAdapterError::MalformedTemporalValue`] when the text cannot
/// be parsed as a time.
pub fn decode_time(
    raw: Option<&str>,
    zone: FixedOffset,
) -> Result<Option<DateTime<FixedOffset>>, MssqlAdapterError> {
    match raw {
        None => Ok(None),
        Some(text) => {
            let anchored = format!("{TIME_ANCHOR_DATE} {text}");
            // Report the caller's text in errors, not the anchored variant.
            parse_in_zone(&anchored, zone)
                .map(Some)
                .map_err(|err| match err {
                    MssqlAdapterError::MalformedTemporalValue { source, .. } => {
                        MssqlAdapterError::MalformedTemporalValue {
                            input: text.to_string(),
                            source,
                        }
                    }
                    other => other,
                })
        }
    }
}

/// Format a timestamp as the driver's expected parameter text.
///
/// Fractional seconds are emitted to full significance with trailing zeros
/// trimmed, never padded to a 3/6/9-digit group.
#[must_use]
pub fn encode_timestamp(value: &DateTime<FixedOffset>) -> String {
    let naive = value.naive_local();
    let mut out = naive.format("%Y-%m-%dT%H:%M:%S").to_string();
    push_fraction(&mut out, naive.nanosecond());
    out
}

/// Format a time-of-day as the driver's expected parameter text.
///
/// Keeps fractional digits beyond the two-digit default the driver's native
/// time binding truncates to.
#[must_use]
pub fn encode_time(value: &NaiveTime) -> String {
    let mut out = value.format("%H:%M:%S").to_string();
    push_fraction(&mut out, value.nanosecond());
    out
}

fn parse_in_zone(
    raw: &str,
    zone: FixedOffset,
) -> Result<DateTime<FixedOffset>, MssqlAdapterError> {
    let naive = parse_naive(raw).map_err(|source| MssqlAdapterError::MalformedTemporalValue {
        input: raw.to_string(),
        source,
    })?;
    Ok(DateTime::from_naive_utc_and_offset(naive - zone.fix(), zone))
}

fn parse_naive(raw: &str) -> Result<NaiveDateTime, chrono::format::ParseError> {
    // %.f matches an optional fraction, so one format covers both cases.
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|err| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|date| date.and_time(NaiveTime::MIN))
                .map_err(|_| err)
        })
}

// Append ".<fraction>" with trailing zeros trimmed; nothing for whole seconds.
fn push_fraction(out: &mut String, nanos: u32) {
    if nanos == 0 {
        return;
    }
    let mut fraction = format!("{nanos:09}");
    while fraction.ends_with('0') {
        fraction.pop();
    }
    out.push('.');
    out.push_str(&fraction);
}
