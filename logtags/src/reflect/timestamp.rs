//! The well-known timestamp type.

use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, SecondsFormat, Utc};

/// Rendered in place of a timestamp outside the representable range.
pub const INVALID_TIMESTAMP: &str = "<invalid timestamp>";

// 0001-01-01T00:00:00Z and 9999-12-31T23:59:59Z
const MIN_SECONDS: i64 = -62_135_596_800;
const MAX_SECONDS: i64 = 253_402_300_799;
const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// A point in time as seconds and nanoseconds since the Unix epoch.
///
/// Shown as its canonical RFC 3339 form in UTC (`Z` suffix, 0, 3, 6 or 9
/// fractional digits) instead of being walked as a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl Timestamp {
    #[must_use]
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Converts to a `chrono` date-time, or `None` when out of range.
    ///
    /// The valid range is years 1 through 9999 with `0 <= nanos < 1e9`.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !(MIN_SECONDS..=MAX_SECONDS).contains(&self.seconds) {
            return None;
        }
        if !(0..NANOS_PER_SECOND).contains(&self.nanos) {
            return None;
        }
        let nanos = u32::try_from(self.nanos).ok()?;
        DateTime::from_timestamp(self.seconds, nanos)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(datetime) => f.write_str(&datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => f.write_str(INVALID_TIMESTAMP),
        }
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since) => Self {
                seconds: i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
                nanos: i32::try_from(since.subsec_nanos()).unwrap_or(0),
            },
            Err(before) => {
                let before = before.duration();
                let seconds = i64::try_from(before.as_secs()).map_or(i64::MIN, |s| -s);
                let nanos = i32::try_from(before.subsec_nanos()).unwrap_or(0);
                if nanos == 0 {
                    Self { seconds, nanos }
                } else {
                    Self {
                        seconds: seconds.saturating_sub(1),
                        nanos: NANOS_PER_SECOND - nanos,
                    }
                }
            }
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self {
            seconds: datetime.timestamp(),
            // Leap seconds report nanos >= 1e9; clamp into range.
            nanos: i32::try_from(datetime.timestamp_subsec_nanos())
                .unwrap_or(0)
                .min(NANOS_PER_SECOND - 1),
        }
    }
}

#[cfg(feature = "time")]
impl From<time::OffsetDateTime> for Timestamp {
    fn from(datetime: time::OffsetDateTime) -> Self {
        Self {
            seconds: datetime.unix_timestamp(),
            nanos: i32::try_from(datetime.nanosecond()).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn formats_epoch_without_fraction() {
        assert_eq!(Timestamp::new(0, 0).to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn formats_fraction_in_groups_of_three() {
        assert_eq!(
            Timestamp::new(63_108_020, 21_000_000).to_string(),
            "1972-01-01T10:00:20.021Z"
        );
        assert_eq!(
            Timestamp::new(1, 1_000).to_string(),
            "1970-01-01T00:00:01.000001Z"
        );
        assert_eq!(
            Timestamp::new(1, 1).to_string(),
            "1970-01-01T00:00:01.000000001Z"
        );
    }

    #[test]
    fn out_of_range_values_are_marked() {
        assert_eq!(Timestamp::new(0, -1).to_string(), INVALID_TIMESTAMP);
        assert_eq!(
            Timestamp::new(MAX_SECONDS + 1, 0).to_string(),
            INVALID_TIMESTAMP
        );
        assert_eq!(
            Timestamp::new(MIN_SECONDS, 0).to_string(),
            "0001-01-01T00:00:00Z"
        );
    }

    #[test]
    fn converts_system_time_before_epoch() {
        let time = UNIX_EPOCH - Duration::from_millis(1_500);
        assert_eq!(Timestamp::from(time), Timestamp::new(-2, 500_000_000));
    }

    #[test]
    fn converts_system_time_after_epoch() {
        let time = UNIX_EPOCH + Duration::new(10, 5);
        assert_eq!(Timestamp::from(time), Timestamp::new(10, 5));
    }

    #[test]
    fn converts_chrono_datetime() {
        let datetime = DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap();
        assert_eq!(
            Timestamp::from(datetime),
            Timestamp::new(1_700_000_000, 250_000_000)
        );
    }
}
