//! Parameter binding strategies for temporal values.
//!
//! Produces `tiberius::ColumnData` wire values. The text-bound strategy is
//! the default for the profiled drivers (see
//! [`DriverProfile::text_bound_temporals`]); the native strategy defers to the
//! driver crate's own `ToSql` encoding.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, NaiveTime};
use tiberius::{ColumnData, ToSql};

use crate::profile::DriverProfile;
use crate::temporal;

/// Bind a timestamp parameter.
///
/// Text binding targets an nvarchar parameter and lets the server cast it,
/// which keeps the requested precision intact.
#[must_use]
pub fn bind_timestamp<'a>(
    profile: &DriverProfile,
    value: &'a DateTime<FixedOffset>,
) -> ColumnData<'a> {
    if profile.text_bound_temporals() {
        ColumnData::String(Some(Cow::Owned(temporal::encode_timestamp(value))))
    } else {
        value.to_sql()
    }
}

/// Bind a time-of-day parameter.
///
/// The text form carries the full fractional precision instead of the
/// two-digit default of the native binding.
#[must_use]
pub fn bind_time<'a>(profile: &DriverProfile, value: &'a NaiveTime) -> ColumnData<'a> {
    if profile.text_bound_temporals() {
        ColumnData::String(Some(Cow::Owned(temporal::encode_time(value))))
    } else {
        value.to_sql()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_bind_as_text_for_profiled_drivers() {
        let profile = DriverProfile::default();
        let value = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 4, 13, 45, 30)
            .unwrap();

        match bind_timestamp(&profile, &value) {
            ColumnData::String(Some(text)) => assert_eq!(text, "2024-05-04T13:45:30"),
            other => panic!("expected text binding, got {other:?}"),
        }
    }

    #[test]
    fn times_bind_as_text_with_full_fraction() {
        let profile = DriverProfile::default();
        let value = NaiveTime::from_hms_nano_opt(13, 45, 30, 123_456_700).unwrap();

        match bind_time(&profile, &value) {
            ColumnData::String(Some(text)) => assert_eq!(text, "13:45:30.1234567"),
            other => panic!("expected text binding, got {other:?}"),
        }
    }
}
