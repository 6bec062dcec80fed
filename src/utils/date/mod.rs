// Date utility functions
// Instant parsing/formatting and the wall-clock-to-instant editing policy

use chrono::{DateTime, LocalResult, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid timestamp: {raw:?}")]
    InvalidTimestamp { raw: String },
    #[error("no such local time {y:04}-{m:02}-{d:02} {hour:02}:{minute:02} in {zone}")]
    NonexistentLocalTime {
        y: i32,
        m: u32,
        d: u32,
        hour: u32,
        minute: u32,
        zone: String,
    },
}

/// Parse an RFC 3339 timestamp into an absolute instant.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, DateError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DateError::InvalidTimestamp {
            raw: raw.to_string(),
        })
}

/// Format an instant as RFC 3339 in UTC, the storage representation.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// Convert date/time fields entered in the editor to an absolute instant.
///
/// Policy: the entered wall-clock time is interpreted in the event's
/// *selected* timezone, not the viewer's. A DST-ambiguous local time resolves
/// to the earlier instant; a nonexistent one (spring-forward gap) is an
/// error the editor must surface.
pub fn instant_from_local_fields(
    y: i32,
    m: u32,
    d: u32,
    hour: u32,
    minute: u32,
    zone: Tz,
) -> Result<DateTime<Utc>, DateError> {
    let nonexistent = || DateError::NonexistentLocalTime {
        y,
        m,
        d,
        hour,
        minute,
        zone: zone.name().to_string(),
    };

    match zone.with_ymd_and_hms(y, m, d, hour, minute, 0) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _later) => Ok(earlier.with_timezone(&Utc)),
        LocalResult::None => Err(nonexistent()),
    }
}

/// Format an instant as the wall-clock time of the given zone, for display
/// next to the timezone picker.
pub fn format_in_zone(instant: DateTime<Utc>, zone: Tz) -> String {
    instant
        .with_timezone(&zone)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_round_trip() {
        let instant = parse_instant("2026-01-01T00:00:00+08:00").unwrap();
        assert_eq!(format_instant(instant), "2025-12-31T16:00:00Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_instant("tomorrow-ish"),
            Err(DateError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_entered_time_is_wall_clock_in_selected_zone() {
        // Midnight entered with Singapore selected is 16:00 UTC the day before
        let instant =
            instant_from_local_fields(2026, 1, 1, 0, 0, chrono_tz::Asia::Singapore).unwrap();
        assert_eq!(format_instant(instant), "2025-12-31T16:00:00Z");
    }

    #[test]
    fn test_same_fields_different_zone_different_instant() {
        let sg = instant_from_local_fields(2026, 1, 1, 0, 0, chrono_tz::Asia::Singapore).unwrap();
        let ny = instant_from_local_fields(2026, 1, 1, 0, 0, chrono_tz::America::New_York).unwrap();
        assert_ne!(sg, ny);
    }

    #[test]
    fn test_ambiguous_local_time_takes_earlier_instant() {
        // US fall-back 2025: 01:30 on Nov 2 happens twice in New York
        let instant =
            instant_from_local_fields(2025, 11, 2, 1, 30, chrono_tz::America::New_York).unwrap();
        // Earlier occurrence is still EDT (UTC-4)
        assert_eq!(format_instant(instant), "2025-11-02T05:30:00Z");
    }

    #[test]
    fn test_nonexistent_local_time_is_an_error() {
        // US spring-forward 2025: 02:30 on Mar 9 does not exist in New York
        let result =
            instant_from_local_fields(2025, 3, 9, 2, 30, chrono_tz::America::New_York);
        assert!(matches!(
            result,
            Err(DateError::NonexistentLocalTime { .. })
        ));
    }

    #[test]
    fn test_format_in_zone() {
        let instant = parse_instant("2025-12-31T16:00:00Z").unwrap();
        assert_eq!(
            format_in_zone(instant, chrono_tz::Asia::Singapore),
            "2026-01-01 00:00"
        );
    }
}
