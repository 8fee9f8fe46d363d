use clap::Parser;
use meetingtime_core::error::CoreError;
use meetingtime_core::models::ScheduleKind;
use owo_colors::{OwoColorize, Style};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod parser;
mod timezone;
mod util;
mod views;

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        cli::Commands::Next(command) => commands::next::next_meeting(&config, command),
        cli::Commands::Previous(command) => {
            commands::previous::previous_meeting(&config, command)
        }
        cli::Commands::Upcoming(command) => {
            commands::upcoming::upcoming_meetings(&config, command)
        }
        cli::Commands::Describe(command) => {
            commands::describe::describe_schedules(&config, command)
        }
        cli::Commands::Timezones(command) => commands::timezones::list_timezones(command),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never mix with query results.
///
/// `MEETINGTIME_LOG` takes an `EnvFilter` directive; `--verbose` forces `debug`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("MEETINGTIME_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.chain().find_map(|e| e.downcast_ref::<CoreError>()) {
        match core_error {
            CoreError::NoEarlierMeetings => {
                eprintln!(
                    "{} No meetings on or before this date.",
                    "Error:".style(error_style)
                );
            }
            CoreError::EmptySchedule => {
                eprintln!("{} No schedules to search.", "Error:".style(error_style));
                eprintln!(
                    "Add [[schedules]] to meetingtime.toml or pass --every and --first."
                );
            }
            CoreError::UnknownScheduleType(_) => {
                eprintln!("{} {:#}", "Error:".style(error_style), err);
                let known: Vec<String> =
                    ScheduleKind::ALL.iter().map(|kind| kind.to_string()).collect();
                eprintln!("Known schedule types: {}", known.join(", ").yellow());
            }
            CoreError::InvalidTimezone(tz) => {
                eprintln!("{} {:#}", "Error:".style(error_style), err);
                let suggestions = timezone::suggest_timezone(tz);
                if !suggestions.is_empty() {
                    eprintln!("Did you mean one of these?");
                    for suggestion in suggestions {
                        eprintln!("  {}", suggestion.yellow());
                    }
                }
            }
            _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}
