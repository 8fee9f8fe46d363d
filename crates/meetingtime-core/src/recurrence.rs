use chrono::{DateTime, Days, Months, NaiveDateTime, Utc, Weekday};
use tracing::{debug, trace};

use crate::error::CoreError;
use crate::models::{Schedule, ScheduleKind};
use crate::timezone::{resolve_local, to_local};
use crate::weekday::ordinal_weekday;

/// Lazily generated, unbounded sequence of a schedule's occurrences.
///
/// Yields the first occurrence, then applies one increment at a time, so a
/// monthly schedule anchored on the 31st follows the clamped day onwards
/// (Jan 31, Feb 29, Mar 29). The wall-clock time of day is carried from step
/// to step. After an error is yielded the sequence ends.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    schedule: &'a Schedule,
    /// Wall-clock time of the last yielded occurrence
    last_local: Option<NaiveDateTime>,
    finished: bool,
}

impl<'a> Occurrences<'a> {
    fn new(schedule: &'a Schedule) -> Self {
        Self {
            schedule,
            last_local: None,
            finished: false,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Result<DateTime<Utc>, CoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(last) = self.last_local else {
            self.last_local = Some(self.schedule.first_local());
            return Some(Ok(self.schedule.first()));
        };

        let resolved = self.schedule.advance(last).and_then(|local| {
            self.last_local = Some(local);
            resolve_local(local, &self.schedule.timezone())
        });
        if resolved.is_err() {
            self.finished = true;
        }
        Some(resolved)
    }
}

/// Scans forward one day at a time from the day after `from` until a date
/// with the requested ordinal weekday. Months without that ordinal (no 5th
/// Monday, say) are skipped over.
fn next_matching_weekday(
    from: NaiveDateTime,
    target: (Weekday, u32),
) -> Result<NaiveDateTime, CoreError> {
    let mut candidate = from;
    loop {
        candidate = candidate
            .checked_add_days(Days::new(1))
            .ok_or_else(|| CoreError::OutOfRange(format!("day after {}", candidate)))?;
        if ordinal_weekday(&candidate) == target {
            return Ok(candidate);
        }
    }
}

impl Schedule {
    /// Moves a wall-clock time forward by one period of this schedule.
    ///
    /// Month arithmetic clamps to the end of shorter months
    /// (Jan 31 + 1 month is Feb 29 in a leap year).
    fn advance(&self, local: NaiveDateTime) -> Result<NaiveDateTime, CoreError> {
        let frequency = self.frequency();
        let advanced = match self.kind() {
            ScheduleKind::Daily => local.checked_add_days(Days::new(u64::from(frequency))),
            ScheduleKind::Weekly => local.checked_add_days(Days::new(7 * u64::from(frequency))),
            ScheduleKind::Monthly => local.checked_add_months(Months::new(frequency)),
            ScheduleKind::Yearly => frequency
                .checked_mul(12)
                .and_then(|months| local.checked_add_months(Months::new(months))),
            ScheduleKind::MonthlyByWeekday => {
                return next_matching_weekday(local, ordinal_weekday(&self.first_local()));
            }
        };
        advanced.ok_or_else(|| {
            CoreError::OutOfRange(format!(
                "{} advanced by {} ({})",
                local,
                frequency,
                self.kind()
            ))
        })
    }

    /// Returns the next raw candidate occurrence after `instant`.
    ///
    /// # Arguments
    /// * `instant` - A valid occurrence of this schedule (for monthly-by-weekday
    ///   schedules, any instant)
    ///
    /// # Returns
    /// * `Result<DateTime<Utc>, CoreError>` - The following candidate
    ///
    /// # Behavior
    /// - Daily: `instant + frequency` days
    /// - Weekly: `instant + 7 × frequency` days
    /// - Monthly: `instant + frequency` months, clamped to the end of the month
    /// - Yearly: `instant + frequency` years, clamped (Feb 29 becomes Feb 28)
    /// - MonthlyByWeekday: the first later day that is the same ordinal weekday
    ///   as the first occurrence, keeping the time of day of `instant`
    /// - Arithmetic happens on the wall clock of the schedule's timezone
    pub fn increment(&self, instant: DateTime<Utc>) -> Result<DateTime<Utc>, CoreError> {
        let tz = self.timezone();
        let local = self.advance(to_local(instant, &tz))?;
        resolve_local(local, &tz)
    }

    /// Iterates over every occurrence of this schedule, starting with the first.
    pub fn occurrences(&self) -> Occurrences<'_> {
        Occurrences::new(self)
    }

    /// Finds the first occurrence strictly after the given time.
    ///
    /// # Arguments
    /// * `after` - Find the meeting following this UTC time
    ///
    /// # Returns
    /// * `Result<DateTime<Utc>, CoreError>` - Next occurrence time
    ///
    /// # Behavior
    /// - Starts at the first meeting and increments until past `after`
    /// - An occurrence exactly at `after` is not "next"
    /// - Times before the first meeting return the first meeting
    pub fn next(&self, after: DateTime<Utc>) -> Result<DateTime<Utc>, CoreError> {
        for (steps, occurrence) in self.occurrences().enumerate() {
            let occurrence = occurrence?;
            trace!(%occurrence, "checking candidate");
            if occurrence > after {
                debug!(kind = %self.kind(), %after, %occurrence, steps, "found next occurrence");
                return Ok(occurrence);
            }
        }
        Err(CoreError::OutOfRange(format!("no occurrence after {}", after)))
    }

    /// Finds the last occurrence strictly before the given time.
    ///
    /// # Arguments
    /// * `before` - Find the meeting preceding this UTC time
    ///
    /// # Returns
    /// * `Result<DateTime<Utc>, CoreError>` - Previous occurrence time
    ///
    /// # Behavior
    /// - Fails with `NoEarlierMeetings` when `before` is at or before the first meeting
    /// - Otherwise walks forward from the first meeting and returns the last
    ///   occurrence before `before`
    pub fn previous(&self, before: DateTime<Utc>) -> Result<DateTime<Utc>, CoreError> {
        if before <= self.first() {
            return Err(CoreError::NoEarlierMeetings);
        }

        let mut previous = self.first();
        for (steps, occurrence) in self.occurrences().enumerate() {
            let occurrence = occurrence?;
            if occurrence >= before {
                debug!(kind = %self.kind(), %before, %previous, steps, "found previous occurrence");
                return Ok(previous);
            }
            previous = occurrence;
        }
        Err(CoreError::OutOfRange(format!("no occurrence before {}", before)))
    }

    /// Preview upcoming occurrences for this schedule.
    ///
    /// # Arguments
    /// * `after` - Only occurrences strictly after this time are returned
    /// * `count` - Maximum number of occurrences to return
    pub fn upcoming(
        &self,
        after: DateTime<Utc>,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>, CoreError> {
        self.occurrences()
            .filter(|occurrence| occurrence.as_ref().map_or(true, |o| *o > after))
            .take(count)
            .collect()
    }
}
