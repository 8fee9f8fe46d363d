use anyhow::{anyhow, Result};
use meetingtime_core::error::CoreError;

use crate::cli::UpcomingCommand;
use crate::config::Config;
use crate::util::select_schedules;
use crate::views::table::{display_occurrences, ViewOccurrence};

pub fn upcoming_meetings(config: &Config, command: UpcomingCommand) -> Result<()> {
    if command.count == 0 {
        return Err(anyhow!(CoreError::InvalidInput(
            "--count must be at least 1".to_string()
        )));
    }

    let selection = select_schedules(config, &command.selection)?;
    let after = selection.parse_when(command.after.as_deref())?;

    let occurrences: Vec<ViewOccurrence> = selection
        .to_slice()
        .upcoming(after, command.count)?
        .into_iter()
        .map(|at| ViewOccurrence {
            at,
            schedules: selection
                .names_meeting_at(at)
                .into_iter()
                .map(String::from)
                .collect(),
        })
        .collect();

    display_occurrences(&occurrences, &selection.display_tz);
    Ok(())
}
