use crate::error::CoreError;
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Validate an IANA timezone name and return the parsed zone
pub fn validate_timezone(timezone: &str) -> Result<Tz, CoreError> {
    Tz::from_str(timezone).map_err(|_| CoreError::InvalidTimezone(timezone.to_string()))
}

/// Wall-clock time of `instant` in `tz`
#[inline]
pub fn to_local(instant: DateTime<Utc>, tz: &Tz) -> NaiveDateTime {
    instant.with_timezone(tz).naive_local()
}

/// Maps a wall-clock time in `tz` back to a UTC instant.
///
/// Ambiguous times (clocks falling back) resolve to the earliest instant.
/// Times skipped by a spring-forward transition move one hour later.
pub fn resolve_local(local: NaiveDateTime, tz: &Tz) -> Result<DateTime<Utc>, CoreError> {
    if let Some(resolved) = tz.from_local_datetime(&local).earliest() {
        return Ok(resolved.with_timezone(&Utc));
    }

    let shifted = local
        .checked_add_signed(Duration::hours(1))
        .ok_or_else(|| CoreError::OutOfRange(local.to_string()))?;
    tz.from_local_datetime(&shifted)
        .earliest()
        .map(|resolved| resolved.with_timezone(&Utc))
        .ok_or_else(|| {
            CoreError::OutOfRange(format!("{} does not exist in {}", local, tz.name()))
        })
}

/// Format datetime with timezone-aware display
pub fn format_with_timezone(datetime: DateTime<Utc>, tz: &Tz, format: &str) -> String {
    datetime.with_timezone(tz).format(format).to_string()
}
