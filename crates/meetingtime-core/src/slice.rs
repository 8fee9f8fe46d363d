use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use tracing::debug;

use crate::error::CoreError;
use crate::models::Schedule;

/// Several schedules treated as one: the next meeting is whichever schedule
/// meets soonest, the previous one whichever met most recently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleSlice(Vec<Schedule>);

impl ScheduleSlice {
    pub fn new(schedules: Vec<Schedule>) -> Self {
        Self(schedules)
    }

    pub fn push(&mut self, schedule: Schedule) {
        self.0.push(schedule);
    }

    pub fn into_inner(self) -> Vec<Schedule> {
        self.0
    }

    /// Returns the earliest next meeting from all schedules in the slice.
    ///
    /// # Behavior
    /// - Fails with `EmptySchedule` when the slice has no schedules
    /// - Any schedule's error aborts the whole query
    pub fn next(&self, after: DateTime<Utc>) -> Result<DateTime<Utc>, CoreError> {
        let mut earliest: Option<DateTime<Utc>> = None;
        for schedule in &self.0 {
            let next = schedule.next(after)?;
            if earliest.map_or(true, |current| next < current) {
                earliest = Some(next);
            }
        }

        let earliest = earliest.ok_or(CoreError::EmptySchedule)?;
        debug!(schedules = self.0.len(), %after, %earliest, "combined next occurrence");
        Ok(earliest)
    }

    /// Returns the latest previous meeting from all schedules in the slice.
    ///
    /// # Behavior
    /// - Schedules without an earlier meeting are ignored
    /// - Any other error aborts the whole query
    /// - Fails with `NoEarlierMeetings` when no schedule has an earlier meeting,
    ///   including when the slice is empty
    pub fn previous(&self, before: DateTime<Utc>) -> Result<DateTime<Utc>, CoreError> {
        let mut latest: Option<DateTime<Utc>> = None;
        for schedule in &self.0 {
            let previous = match schedule.previous(before) {
                Ok(previous) => previous,
                Err(CoreError::NoEarlierMeetings) => continue,
                Err(e) => return Err(e),
            };
            if latest.map_or(true, |current| previous > current) {
                latest = Some(previous);
            }
        }

        let latest = latest.ok_or(CoreError::NoEarlierMeetings)?;
        debug!(schedules = self.0.len(), %before, %latest, "combined previous occurrence");
        Ok(latest)
    }

    /// The next `count` combined meetings strictly after `after`.
    ///
    /// Meetings shared by several schedules at the same instant are reported once.
    pub fn upcoming(
        &self,
        after: DateTime<Utc>,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>, CoreError> {
        let mut occurrences = Vec::with_capacity(count);
        let mut cursor = after;
        while occurrences.len() < count {
            cursor = self.next(cursor)?;
            occurrences.push(cursor);
        }
        Ok(occurrences)
    }
}

impl Deref for ScheduleSlice {
    type Target = [Schedule];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Schedule>> for ScheduleSlice {
    fn from(schedules: Vec<Schedule>) -> Self {
        Self(schedules)
    }
}

impl FromIterator<Schedule> for ScheduleSlice {
    fn from_iter<I: IntoIterator<Item = Schedule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ScheduleSlice {
    type Item = Schedule;
    type IntoIter = std::vec::IntoIter<Schedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScheduleSlice {
    type Item = &'a Schedule;
    type IntoIter = std::slice::Iter<'a, Schedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
