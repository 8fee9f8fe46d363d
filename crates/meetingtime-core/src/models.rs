use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::timezone::to_local;

/// The closed set of recurrence patterns a [`Schedule`] can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleKind {
    /// Every `frequency` days
    Daily,
    /// Every `frequency` weeks
    Weekly,
    /// Every `frequency` months, on the anchor's day of the month
    Monthly,
    /// Every month, on the anchor's ordinal weekday (e.g. the 2nd Wednesday)
    MonthlyByWeekday,
    /// Every `frequency` years
    Yearly,
}

impl ScheduleKind {
    pub const ALL: [ScheduleKind; 5] = [
        ScheduleKind::Daily,
        ScheduleKind::Weekly,
        ScheduleKind::Monthly,
        ScheduleKind::MonthlyByWeekday,
        ScheduleKind::Yearly,
    ];

    /// Raw numeric tag, the inverse of `ScheduleKind::try_from(u8)`.
    pub fn tag(self) -> u8 {
        match self {
            ScheduleKind::Daily => 0,
            ScheduleKind::Weekly => 1,
            ScheduleKind::Monthly => 2,
            ScheduleKind::MonthlyByWeekday => 3,
            ScheduleKind::Yearly => 4,
        }
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleKind::Daily => write!(f, "daily"),
            ScheduleKind::Weekly => write!(f, "weekly"),
            ScheduleKind::Monthly => write!(f, "monthly"),
            ScheduleKind::MonthlyByWeekday => write!(f, "monthly-by-weekday"),
            ScheduleKind::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for ScheduleKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "daily" => Ok(ScheduleKind::Daily),
            "weekly" => Ok(ScheduleKind::Weekly),
            "monthly" => Ok(ScheduleKind::Monthly),
            "monthlybyweekday" => Ok(ScheduleKind::MonthlyByWeekday),
            "yearly" | "annually" => Ok(ScheduleKind::Yearly),
            _ => Err(CoreError::UnknownScheduleType(s.to_string())),
        }
    }
}

impl TryFrom<u8> for ScheduleKind {
    type Error = CoreError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        ScheduleKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or(CoreError::UnsupportedVariant(tag))
    }
}

// ============================================================================
// Schedule
// ============================================================================

/// A regular schedule for a meeting: one recurrence pattern anchored on its
/// first occurrence.
///
/// Schedules are immutable values. Calendar arithmetic happens on the wall
/// clock of `timezone` (UTC unless set with [`Schedule::in_timezone`]), so a
/// daily 9am meeting stays at 9am across daylight saving changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSchedule")]
pub struct Schedule {
    kind: ScheduleKind,
    first: DateTime<Utc>,
    frequency: u32,
    timezone: Tz,
}

impl Schedule {
    /// Creates a schedule of any kind.
    ///
    /// # Behavior
    /// - `frequency` must be at least 1
    /// - `MonthlyByWeekday` only supports a frequency of 1
    pub fn new(kind: ScheduleKind, first: DateTime<Utc>, frequency: u32) -> Result<Self, CoreError> {
        if frequency == 0 {
            return Err(CoreError::InvalidInput(
                "Schedule frequency must be at least 1".to_string(),
            ));
        }
        if kind == ScheduleKind::MonthlyByWeekday && frequency != 1 {
            return Err(CoreError::InvalidInput(format!(
                "Monthly-by-weekday schedules recur every month; frequency {} is not supported",
                frequency
            )));
        }

        Ok(Self {
            kind,
            first,
            frequency,
            timezone: Tz::UTC,
        })
    }

    /// A meeting every `frequency` days starting at `first`
    pub fn daily(first: DateTime<Utc>, frequency: u32) -> Result<Self, CoreError> {
        Self::new(ScheduleKind::Daily, first, frequency)
    }

    /// A meeting every `frequency` weeks starting at `first`
    pub fn weekly(first: DateTime<Utc>, frequency: u32) -> Result<Self, CoreError> {
        Self::new(ScheduleKind::Weekly, first, frequency)
    }

    /// A meeting every `frequency` months on the same day of the month as `first`
    pub fn monthly(first: DateTime<Utc>, frequency: u32) -> Result<Self, CoreError> {
        Self::new(ScheduleKind::Monthly, first, frequency)
    }

    /// A meeting every month on the same ordinal weekday as `first`
    /// (e.g. the 2nd Wednesday).
    pub fn monthly_by_weekday(first: DateTime<Utc>) -> Self {
        Self {
            kind: ScheduleKind::MonthlyByWeekday,
            first,
            frequency: 1,
            timezone: Tz::UTC,
        }
    }

    /// A meeting every `frequency` years starting at `first`
    pub fn yearly(first: DateTime<Utc>, frequency: u32) -> Result<Self, CoreError> {
        Self::new(ScheduleKind::Yearly, first, frequency)
    }

    /// Returns the same schedule with its calendar arithmetic done in `timezone`.
    pub fn in_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn kind(&self) -> ScheduleKind {
        self.kind
    }

    /// The anchor occurrence all others are computed from
    pub fn first(&self) -> DateTime<Utc> {
        self.first
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Wall-clock time of the first occurrence in the schedule's timezone
    pub fn first_local(&self) -> NaiveDateTime {
        to_local(self.first, &self.timezone)
    }
}

#[derive(Deserialize)]
struct RawSchedule {
    kind: ScheduleKind,
    first: DateTime<Utc>,
    #[serde(default = "default_frequency")]
    frequency: u32,
    #[serde(default)]
    timezone: Option<Tz>,
}

fn default_frequency() -> u32 {
    1
}

impl TryFrom<RawSchedule> for Schedule {
    type Error = CoreError;

    fn try_from(raw: RawSchedule) -> Result<Self, Self::Error> {
        let schedule = Schedule::new(raw.kind, raw.first, raw.frequency)?;
        Ok(schedule.in_timezone(raw.timezone.unwrap_or(Tz::UTC)))
    }
}
