use anyhow::Result;
use chrono::Utc;
use meetingtime_core::describe::describe;

use crate::cli::DescribeCommand;
use crate::config::Config;
use crate::util::select_schedules;
use crate::views::table::{display_schedules, ViewSchedule};

pub fn describe_schedules(config: &Config, command: DescribeCommand) -> Result<()> {
    let selection = select_schedules(config, &command.selection)?;
    let now = Utc::now();

    let schedules: Vec<ViewSchedule> = selection
        .schedules
        .iter()
        .map(|named| ViewSchedule {
            name: named.name.clone(),
            kind: named.schedule.kind(),
            description: describe(&named.schedule),
            timezone: named.schedule.timezone(),
            next: named.schedule.next(now).ok(),
        })
        .collect();

    display_schedules(&schedules, &selection.display_tz);
    Ok(())
}
