use anyhow::{Context, Result};
use chrono_tz::Tz;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use meetingtime_core::models::{Schedule, ScheduleKind};
use meetingtime_core::timezone::validate_timezone;
use serde::Deserialize;

use crate::parser::parse_instant;
use crate::timezone::detect_system_timezone;

const CONFIG_FILE: &str = "meetingtime.toml";

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Timezone used for display and for schedules without their own (IANA format)
    #[serde(default = "detect_system_timezone")]
    pub default_timezone: String,
    #[serde(default)]
    pub schedules: Vec<ScheduleEntry>,
}

/// A named schedule as written in the configuration file
#[derive(Deserialize, Debug, Clone)]
pub struct ScheduleEntry {
    pub name: String,
    /// daily | weekly | monthly | monthly-by-weekday | yearly
    pub kind: String,
    /// First meeting; RFC 3339, or a local date/time in the entry's timezone
    pub first: String,
    #[serde(default = "default_frequency")]
    pub frequency: u32,
    pub timezone: Option<String>,
}

fn default_frequency() -> u32 {
    1
}

impl Config {
    /// Loads `meetingtime.toml` (or the file named by `MEETINGTIME_CONFIG`),
    /// overridden by `MEETINGTIME_`-prefixed environment variables.
    pub fn load() -> Result<Self, figment::Error> {
        let path = std::env::var("MEETINGTIME_CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());
        Self::figment(&path).extract()
    }

    fn figment(path: &str) -> Figment {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("MEETINGTIME_"))
    }

    pub fn default_timezone(&self) -> Result<Tz> {
        validate_timezone(&self.default_timezone)
            .with_context(|| "Invalid default_timezone in configuration".to_string())
    }
}

impl ScheduleEntry {
    /// Builds the schedule this entry describes, using `default_tz` when the
    /// entry names no timezone of its own.
    pub fn to_schedule(&self, default_tz: Tz) -> Result<Schedule> {
        let context = || format!("Invalid schedule '{}'", self.name);

        let kind: ScheduleKind = self.kind.parse().with_context(context)?;
        let tz = match &self.timezone {
            Some(name) => validate_timezone(name).with_context(context)?,
            None => default_tz,
        };
        let first = parse_instant(&self.first, &tz).with_context(context)?;
        let schedule = Schedule::new(kind, first, self.frequency).with_context(context)?;

        Ok(schedule.in_timezone(tz))
    }
}
