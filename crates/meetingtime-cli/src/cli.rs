use clap::{Args, Parser, Subcommand, ValueEnum};
use meetingtime_core::models::ScheduleKind;

/// Find the next and previous meetings of recurring schedules
#[derive(Parser, Debug)]
#[command(name = "meetingtime", author, version, about, long_about = None)]
pub struct Cli {
    /// Log search details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the next meeting
    Next(NextCommand),
    /// Show the previous meeting
    Previous(PreviousCommand),
    /// List upcoming meetings
    Upcoming(UpcomingCommand),
    /// Describe schedules in plain English
    Describe(DescribeCommand),
    /// List common timezones
    Timezones(TimezonesCommand),
}

/// Which schedules a command works on.
///
/// With neither `--schedule` nor `--every`, every configured schedule is used.
#[derive(Args, Debug, Clone, Default)]
pub struct ScheduleArgs {
    /// Name of a configured schedule (repeat to combine several)
    #[arg(short, long = "schedule", value_name = "NAME")]
    pub schedules: Vec<String>,

    /// Define a schedule on the command line instead of using the configuration
    #[arg(long, value_enum, requires = "first", conflicts_with = "schedules")]
    pub every: Option<RecurrenceShortcut>,

    /// First meeting of the command-line schedule (e.g. '2016-09-14 18:00')
    #[arg(long, value_name = "WHEN", requires = "every")]
    pub first: Option<String>,

    /// Repeat every N days/weeks/months/years
    #[arg(long, requires = "every")]
    pub frequency: Option<u32>,

    /// Timezone for display and for the command-line schedule (IANA format)
    #[arg(long)]
    pub timezone: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct NextCommand {
    #[command(flatten)]
    pub selection: ScheduleArgs,

    /// Find the first meeting after this time (default: now)
    #[arg(long, value_name = "WHEN")]
    pub after: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviousCommand {
    #[command(flatten)]
    pub selection: ScheduleArgs,

    /// Find the last meeting before this time (default: now)
    #[arg(long, value_name = "WHEN")]
    pub before: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct UpcomingCommand {
    #[command(flatten)]
    pub selection: ScheduleArgs,

    /// List meetings after this time (default: now)
    #[arg(long, value_name = "WHEN")]
    pub after: Option<String>,

    /// Number of meetings to show
    #[arg(long, short, default_value = "5")]
    pub count: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct DescribeCommand {
    #[command(flatten)]
    pub selection: ScheduleArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct TimezonesCommand {
    /// Filter timezones by name
    #[arg(long)]
    pub filter: Option<String>,
}

/// Human-friendly recurrence patterns
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceShortcut {
    /// Every N days
    Daily,
    /// Every N weeks (same weekday)
    Weekly,
    /// Every N months (same date)
    Monthly,
    /// Every month on the same ordinal weekday (e.g. 2nd Wednesday)
    MonthlyByWeekday,
    /// Every N years (same date)
    Yearly,
}

impl From<RecurrenceShortcut> for ScheduleKind {
    fn from(shortcut: RecurrenceShortcut) -> Self {
        match shortcut {
            RecurrenceShortcut::Daily => ScheduleKind::Daily,
            RecurrenceShortcut::Weekly => ScheduleKind::Weekly,
            RecurrenceShortcut::Monthly => ScheduleKind::Monthly,
            RecurrenceShortcut::MonthlyByWeekday => ScheduleKind::MonthlyByWeekday,
            RecurrenceShortcut::Yearly => ScheduleKind::Yearly,
        }
    }
}
