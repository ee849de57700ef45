//! Display timezone for hour-of-day and weekday buckets.
//!
//! Calendar dates stay UTC everywhere; only the clock position of an event
//! on the local week moves with the timezone.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    /// Whatever the host reports
    Local,
    Named(Tz),
}

/// Local weekday (0 = Sunday) and hour of an instant.
fn slot_in<Z: TimeZone>(utc: DateTime<Utc>, zone: &Z) -> (usize, usize) {
    let local = utc.with_timezone(zone);
    (
        local.weekday().num_days_from_sunday() as usize,
        local.hour() as usize,
    )
}

impl Timezone {
    /// `None`, blank and `local` select the host zone; `utc`/`z` are
    /// accepted in any case; anything else must be an IANA name.
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let name = value.map(str::trim).unwrap_or_default();
        if name.is_empty() || name.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if ["utc", "z"].iter().any(|alias| name.eq_ignore_ascii_case(alias)) {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        name.parse::<Tz>()
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: name.to_string(),
            })
    }

    /// `(weekday, hour)` bucket for a UTC instant.
    pub(crate) fn week_slot(self, utc: DateTime<Utc>) -> (usize, usize) {
        match self {
            Timezone::Local => slot_in(utc, &chrono::Local),
            Timezone::Named(tz) => slot_in(utc, &tz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_and_empty_return_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
        assert!(matches!(Timezone::parse(Some("  ")).unwrap(), Timezone::Local));
        assert!(matches!(
            Timezone::parse(Some("LOCAL")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", " Z "] {
            let tz = Timezone::parse(Some(raw)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)), "{raw}");
        }
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn named_zone_can_move_hour_and_weekday() {
        // Sunday 02:00 UTC is still Saturday evening in New York
        let utc = "2026-03-01T02:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        assert_eq!(tz.week_slot(utc), (6, 21));
        assert_eq!(Timezone::Named(chrono_tz::UTC).week_slot(utc), (0, 2));
    }
}
