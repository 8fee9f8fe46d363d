use anyhow::Result;
use chrono::Utc;
use comfy_table::Table;
use meetingtime_core::timezone::validate_timezone;

use crate::cli::TimezonesCommand;
use crate::timezone::{get_common_timezones, get_timezone_abbreviation, get_timezone_offset};

pub fn list_timezones(command: TimezonesCommand) -> Result<()> {
    let now = Utc::now();
    let filter = command.filter.map(|f| f.to_lowercase());

    let mut table = Table::new();
    table.set_header(vec!["Timezone", "Offset", "Abbreviation"]);

    for name in get_common_timezones() {
        if let Some(filter) = &filter {
            if !name.to_lowercase().contains(filter) {
                continue;
            }
        }
        let tz = validate_timezone(name)?;
        table.add_row(vec![
            name.to_string(),
            get_timezone_offset(&tz, now),
            get_timezone_abbreviation(&tz, now),
        ]);
    }

    println!("{table}");
    Ok(())
}
