use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use meetingtime_core::models::{Schedule, ScheduleKind};
use meetingtime_core::slice::ScheduleSlice;
use meetingtime_core::timezone::validate_timezone;
use tracing::debug;

use crate::cli::ScheduleArgs;
use crate::config::Config;
use crate::parser::parse_instant;

/// A schedule together with the name it is shown under
#[derive(Debug, Clone)]
pub struct NamedSchedule {
    pub name: String,
    pub schedule: Schedule,
}

/// The schedules a command works on and the timezone to display results in
#[derive(Debug)]
pub struct Selection {
    pub schedules: Vec<NamedSchedule>,
    pub display_tz: Tz,
}

impl Selection {
    pub fn to_slice(&self) -> ScheduleSlice {
        self.schedules.iter().map(|named| named.schedule.clone()).collect()
    }

    /// Names of the selected schedules that meet exactly at `instant`
    pub fn names_meeting_at(&self, instant: DateTime<Utc>) -> Vec<&str> {
        self.schedules
            .iter()
            .filter(|named| {
                named
                    .schedule
                    .occurrences()
                    .map_while(Result::ok)
                    .take_while(|occurrence| *occurrence <= instant)
                    .any(|occurrence| occurrence == instant)
            })
            .map(|named| named.name.as_str())
            .collect()
    }

    /// Parses an optional WHEN argument in the display timezone, defaulting to now
    pub fn parse_when(&self, when: Option<&str>) -> Result<DateTime<Utc>> {
        match when {
            Some(input) => parse_instant(input, &self.display_tz),
            None => Ok(Utc::now()),
        }
    }
}

/// Resolves `--schedule`, `--every`/`--first` and `--timezone` against the configuration.
pub fn select_schedules(config: &Config, args: &ScheduleArgs) -> Result<Selection> {
    let display_tz = match &args.timezone {
        Some(name) => validate_timezone(name)?,
        None => config.default_timezone()?,
    };

    if let Some(every) = args.every {
        let first = args
            .first
            .as_deref()
            .ok_or_else(|| anyhow!("--every requires --first"))?;
        let kind = ScheduleKind::from(every);
        let first = parse_instant(first, &display_tz).context("Invalid --first")?;
        let schedule = Schedule::new(kind, first, args.frequency.unwrap_or(1))?
            .in_timezone(display_tz);
        debug!(kind = %kind, first = %first, "using command-line schedule");

        return Ok(Selection {
            schedules: vec![NamedSchedule {
                name: kind.to_string(),
                schedule,
            }],
            display_tz,
        });
    }

    let default_tz = config.default_timezone()?;
    let mut schedules = Vec::new();
    for entry in &config.schedules {
        if !args.schedules.is_empty() && !args.schedules.contains(&entry.name) {
            continue;
        }
        schedules.push(NamedSchedule {
            name: entry.name.clone(),
            schedule: entry.to_schedule(default_tz)?,
        });
    }

    for requested in &args.schedules {
        if !config.schedules.iter().any(|entry| &entry.name == requested) {
            let known: Vec<&str> = config.schedules.iter().map(|e| e.name.as_str()).collect();
            return Err(anyhow!(
                "No schedule named '{}' in the configuration (known: {})",
                requested,
                if known.is_empty() {
                    "none".to_string()
                } else {
                    known.join(", ")
                }
            ));
        }
    }

    debug!(count = schedules.len(), "selected configured schedules");
    Ok(Selection {
        schedules,
        display_tz,
    })
}
