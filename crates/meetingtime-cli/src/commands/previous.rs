use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::info;

use crate::cli::PreviousCommand;
use crate::config::Config;
use crate::timezone::format_meeting;
use crate::util::select_schedules;

pub fn previous_meeting(config: &Config, command: PreviousCommand) -> Result<()> {
    let selection = select_schedules(config, &command.selection)?;
    let before = selection.parse_when(command.before.as_deref())?;

    let previous = selection.to_slice().previous(before)?;
    info!(%before, %previous, "found previous meeting");

    println!(
        "{} {}",
        "Previous meeting:".green().bold(),
        format_meeting(previous, &selection.display_tz)
    );
    if selection.schedules.len() > 1 {
        println!("  {}", selection.names_meeting_at(previous).join(", ").cyan());
    }
    Ok(())
}
