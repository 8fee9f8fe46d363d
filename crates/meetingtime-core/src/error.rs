use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("No meetings on or before this date")]
    NoEarlierMeetings,

    #[error("Unsupported schedule variant tag: {0}")]
    UnsupportedVariant(u8),

    #[error("Schedule set contains no schedules")]
    EmptySchedule,

    #[error("Unknown schedule type: {0}")]
    UnknownScheduleType(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}
