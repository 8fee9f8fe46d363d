use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_english::{parse_date_string, Dialect};
use chrono_tz::Tz;
use meetingtime_core::timezone::resolve_local;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a point in time given on the command line or in the configuration.
///
/// Accepts RFC 3339 (`2016-09-14T18:00:00Z`), a local date or date/time in
/// `tz` (`2016-09-14`, `2016-09-14 18:00`), or an English phrase relative to
/// now (`next friday 6pm`, `tomorrow`).
pub fn parse_instant(input: &str, tz: &Tz) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(resolve_local(local, tz)?);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow!("Invalid date '{}'", input))?;
        return Ok(resolve_local(midnight, tz)?);
    }

    if input.eq_ignore_ascii_case("now") {
        return Ok(Utc::now());
    }

    let now = Utc::now().with_timezone(tz);
    parse_date_string(input, now, Dialect::Us)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| anyhow!("Failed to parse date '{}': {}", input, e))
}
