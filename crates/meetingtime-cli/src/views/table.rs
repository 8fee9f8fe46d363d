use chrono::{DateTime, Utc};
use chrono_humanize::Humanize;
use chrono_tz::Tz;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use meetingtime_core::models::ScheduleKind;

use crate::timezone::format_meeting;

#[derive(Debug, Clone)]
pub struct ViewOccurrence {
    pub at: DateTime<Utc>,
    /// Schedules meeting at this instant
    pub schedules: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ViewSchedule {
    pub name: String,
    pub kind: ScheduleKind,
    pub description: String,
    pub timezone: Tz,
    pub next: Option<DateTime<Utc>>,
}

pub fn display_occurrences(occurrences: &[ViewOccurrence], tz: &Tz) {
    if occurrences.is_empty() {
        println!("No upcoming meetings.");
        return;
    }

    let now = Utc::now();
    let mut table = Table::new();
    table.set_header(vec!["#", "When", "In", "Schedules"]);

    for (index, occurrence) in occurrences.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(index + 1));
        row.add_cell(Cell::new(format_meeting(occurrence.at, tz)).add_attribute(Attribute::Bold));

        let relative = Cell::new(occurrence.at.humanize());
        row.add_cell(if occurrence.at < now {
            relative.fg(Color::DarkGrey)
        } else {
            relative
        });

        row.add_cell(Cell::new(occurrence.schedules.join(", ")).fg(Color::Cyan));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_schedules(schedules: &[ViewSchedule], tz: &Tz) {
    if schedules.is_empty() {
        println!("No schedules found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Kind", "Description", "Timezone", "Next"]);

    for schedule in schedules {
        let mut row = Row::new();
        row.add_cell(Cell::new(&schedule.name).add_attribute(Attribute::Bold));
        row.add_cell(Cell::new(schedule.kind).fg(Color::Blue));
        row.add_cell(Cell::new(&schedule.description));
        row.add_cell(Cell::new(schedule.timezone.name()));
        row.add_cell(match schedule.next {
            Some(next) => Cell::new(format_meeting(next, tz)),
            None => Cell::new("-").fg(Color::DarkGrey),
        });
        table.add_row(row);
    }

    println!("{table}");
}
