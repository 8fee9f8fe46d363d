//! English descriptions of schedules, e.g. "Every 2nd Wednesday, starting Oct 12 2016 at 6:00PM".

use chrono::{DateTime, Utc};

use crate::error::CoreError;
use crate::models::{Schedule, ScheduleKind};
use crate::timezone::format_with_timezone;
use crate::weekday::{ordinal_suffix, ordinal_weekday};

const DATE_FORMAT: &str = "%a %b %d %Y at %-I:%M%p";
const DATE_FORMAT_NO_DAY: &str = "%b %d %Y at %-I:%M%p";

/// Generates an English description of a schedule.
pub fn describe(schedule: &Schedule) -> String {
    let unit = match schedule.kind() {
        ScheduleKind::Daily => ("day", "days"),
        ScheduleKind::Weekly => ("week", "weeks"),
        ScheduleKind::Monthly => ("month", "months"),
        ScheduleKind::Yearly => ("year", "years"),
        ScheduleKind::MonthlyByWeekday => return monthly_by_weekday(schedule),
    };

    let starting = format_with_timezone(schedule.first(), &schedule.timezone(), DATE_FORMAT);
    match schedule.frequency() {
        1 => format!("Every {} starting {}", unit.0, starting),
        n => format!("Every {} {} starting {}", n, unit.1, starting),
    }
}

fn monthly_by_weekday(schedule: &Schedule) -> String {
    let local = schedule.first().with_timezone(&schedule.timezone());
    let (_, n) = ordinal_weekday(&local);
    format!(
        "Every {}{} {}, starting {}",
        n,
        ordinal_suffix(n),
        local.format("%A"),
        local.format(DATE_FORMAT_NO_DAY)
    )
}

/// Describes a schedule given by its raw kind tag.
///
/// Fails with `UnknownScheduleType` if the tag names no schedule kind.
pub fn describe_raw(tag: u8, first: DateTime<Utc>, frequency: u32) -> Result<String, CoreError> {
    let kind = ScheduleKind::try_from(tag)
        .map_err(|_| CoreError::UnknownScheduleType(tag.to_string()))?;
    Ok(describe(&Schedule::new(kind, first, frequency)?))
}
