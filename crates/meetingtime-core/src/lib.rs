//! # Meetingtime Core Library
//!
//! Calculates the meetings of recurring schedules: given a schedule (daily,
//! weekly, monthly, monthly by weekday or yearly, with a frequency and a first
//! meeting), find the next or previous meeting relative to any instant, for a
//! single schedule or for several schedules combined.
//!
//! ## Features
//!
//! - **Closed set of schedule kinds**: every kind is handled exhaustively
//! - **Ordinal weekdays**: "the 2nd Wednesday of every month" style schedules
//! - **Combined schedules**: [`slice::ScheduleSlice`] answers next/previous
//!   across many schedules at once
//! - **Timezone aware**: calendar arithmetic on the wall clock of an IANA zone
//! - **Pure queries**: schedules are immutable values, safe to share across threads
//!
//! ## Core Modules
//!
//! - [`models`]: Schedule kinds and the `Schedule` value
//! - [`recurrence`]: Occurrence sequence, next and previous meeting search
//! - [`slice`]: Combining several schedules into one
//! - [`weekday`]: Ordinal weekday calculation
//! - [`describe`]: English descriptions of schedules
//! - [`timezone`]: Wall-clock conversion and timezone validation
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use meetingtime_core::{models::Schedule, slice::ScheduleSlice};
//!
//! # fn main() -> Result<(), meetingtime_core::error::CoreError> {
//! // A meeting every other month on the 10th at 6pm
//! let schedule = Schedule::monthly(Utc.with_ymd_and_hms(2016, 1, 10, 18, 0, 0).unwrap(), 2)?;
//! let second = schedule.next(Utc.with_ymd_and_hms(2016, 1, 10, 18, 1, 0).unwrap())?;
//! assert_eq!(second, Utc.with_ymd_and_hms(2016, 3, 10, 18, 0, 0).unwrap());
//! assert_eq!(schedule.previous(second)?, schedule.first());
//!
//! // Meetings on the 1st and 3rd Monday of each month at 7pm
//! let mondays = ScheduleSlice::new(vec![
//!     Schedule::monthly_by_weekday(Utc.with_ymd_and_hms(2016, 9, 5, 19, 0, 0).unwrap()),
//!     Schedule::monthly_by_weekday(Utc.with_ymd_and_hms(2016, 9, 19, 19, 0, 0).unwrap()),
//! ]);
//! let first_in_october = mondays.next(Utc.with_ymd_and_hms(2016, 10, 1, 0, 0, 0).unwrap())?;
//! assert_eq!(first_in_october, Utc.with_ymd_and_hms(2016, 10, 3, 19, 0, 0).unwrap());
//! # Ok(())
//! # }
//! ```

pub mod describe;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod slice;
pub mod timezone;
pub mod weekday;
