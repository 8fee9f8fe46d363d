use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::info;

use crate::cli::NextCommand;
use crate::config::Config;
use crate::timezone::format_meeting;
use crate::util::select_schedules;

pub fn next_meeting(config: &Config, command: NextCommand) -> Result<()> {
    let selection = select_schedules(config, &command.selection)?;
    let after = selection.parse_when(command.after.as_deref())?;

    let next = selection.to_slice().next(after)?;
    info!(%after, %next, "found next meeting");

    println!(
        "{} {}",
        "Next meeting:".green().bold(),
        format_meeting(next, &selection.display_tz)
    );
    if selection.schedules.len() > 1 {
        println!("  {}", selection.names_meeting_at(next).join(", ").cyan());
    }
    Ok(())
}
