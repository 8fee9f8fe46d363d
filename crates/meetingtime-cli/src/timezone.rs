use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use meetingtime_core::timezone::{format_with_timezone, validate_timezone};

/// How meeting times are printed, e.g. `Mon Oct  3 19:00:00 UTC 2016`
pub const DISPLAY_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

/// Detect system timezone
pub fn detect_system_timezone() -> String {
    if let Ok(tz) = std::env::var("TZ") {
        if !tz.is_empty() && validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    if let Ok(tz) = iana_time_zone::get_timezone() {
        if validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    "UTC".to_string()
}

/// Get common timezones for user selection
pub fn get_common_timezones() -> Vec<&'static str> {
    vec![
        "UTC",
        "America/New_York",
        "America/Chicago",
        "America/Denver",
        "America/Los_Angeles",
        "America/Toronto",
        "America/Vancouver",
        "America/Sao_Paulo",
        "Europe/London",
        "Europe/Paris",
        "Europe/Berlin",
        "Europe/Rome",
        "Europe/Madrid",
        "Europe/Amsterdam",
        "Europe/Stockholm",
        "Africa/Johannesburg",
        "Asia/Tokyo",
        "Asia/Seoul",
        "Asia/Shanghai",
        "Asia/Hong_Kong",
        "Asia/Singapore",
        "Asia/Kolkata",
        "Asia/Dubai",
        "Australia/Sydney",
        "Pacific/Auckland",
    ]
}

/// Suggest similar timezones for invalid input
pub fn suggest_timezone(invalid: &str) -> Vec<&'static str> {
    let invalid_lower = invalid.to_lowercase();

    let mut matches: Vec<_> = get_common_timezones()
        .into_iter()
        .filter(|tz| {
            let tz_lower = tz.to_lowercase();
            tz_lower.contains(&invalid_lower)
                || invalid_lower.contains(&tz_lower)
                || tz
                    .split('/')
                    .any(|part| part.to_lowercase().contains(&invalid_lower))
        })
        .collect();

    matches.truncate(5);
    matches
}

/// Format a meeting time for display in `tz`
pub fn format_meeting(instant: DateTime<Utc>, tz: &Tz) -> String {
    format_with_timezone(instant, tz, DISPLAY_FORMAT)
}

/// Get timezone offset string for display (e.g., "-05:00")
pub fn get_timezone_offset(tz: &Tz, at_time: DateTime<Utc>) -> String {
    format_with_timezone(at_time, tz, "%:z")
}

/// Get timezone abbreviation (e.g., "EST", "EDT")
pub fn get_timezone_abbreviation(tz: &Tz, at_time: DateTime<Utc>) -> String {
    format_with_timezone(at_time, tz, "%Z")
}
