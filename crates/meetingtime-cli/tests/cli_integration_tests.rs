/// CLI integration tests for meetingtime
///
/// These tests run the binary as a black box against temporary configuration files.
use predicates::prelude::*;

mod helpers;
use helpers::{assertions, CliTestHarness, TestFixtures};

#[test]
fn test_cli_help_and_version() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("next"))
        .stdout(predicate::str::contains("previous"))
        .stdout(predicate::str::contains("upcoming"));

    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("meetingtime"));

    harness
        .run_failure(&["invalid-command"])
        .stderr(assertions::has_error());
}

#[test]
fn test_next_across_configured_schedules() {
    let harness = CliTestHarness::with_schedules(TestFixtures::first_and_third_monday());

    harness
        .run_success(&["next", "--after", "2016-10-01"])
        .stdout(predicate::str::contains("Mon Oct  3 19:00:00 UTC 2016"))
        .stdout(predicate::str::contains("First Monday"));

    harness
        .run_success(&["next", "--after", "2016-10-03T19:00:00Z"])
        .stdout(predicate::str::contains("Mon Oct 17 19:00:00 UTC 2016"))
        .stdout(predicate::str::contains("Third Monday"));
}

#[test]
fn test_next_for_named_schedule() {
    let harness = CliTestHarness::with_schedules(TestFixtures::first_and_third_monday());

    harness
        .run_success(&["next", "--schedule", "Third Monday", "--after", "2016-10-01"])
        .stdout(predicate::str::contains("Mon Oct 17 19:00:00 UTC 2016"));

    harness
        .run_failure(&["next", "--schedule", "Standup", "--after", "2016-10-01"])
        .stderr(predicate::str::contains("No schedule named 'Standup'"));
}

#[test]
fn test_next_in_display_timezone() {
    let harness = CliTestHarness::with_schedules(TestFixtures::first_and_third_monday());

    harness
        .run_success(&[
            "next",
            "--after",
            "2016-10-01T00:00:00Z",
            "--timezone",
            "America/New_York",
        ])
        .stdout(predicate::str::contains("Mon Oct  3 15:00:00 EDT 2016"));
}

#[test]
fn test_previous_meeting() {
    let harness = CliTestHarness::with_schedules(TestFixtures::wednesday_and_tuesday());

    harness
        .run_success(&["previous", "--before", "2016-10-13"])
        .stdout(predicate::str::contains("Wed Oct 12 18:00:00 UTC 2016"))
        .stdout(predicate::str::contains("Book club"));
}

#[test]
fn test_previous_before_first_meeting_fails() {
    let harness = CliTestHarness::with_schedules(TestFixtures::wednesday_and_tuesday());

    harness
        .run_failure(&["previous", "--before", "2016-09-14 14:00"])
        .stderr(predicate::str::contains("No meetings on or before this date"));
}

#[test]
fn test_command_line_schedules() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&[
            "next",
            "--every",
            "daily",
            "--first",
            "2016-01-01",
            "--after",
            "2016-01-01",
        ])
        .stdout(predicate::str::contains("Sat Jan  2 00:00:00 UTC 2016"));

    harness
        .run_success(&[
            "next",
            "--every",
            "daily",
            "--frequency",
            "5",
            "--first",
            "2016-01-02",
            "--after",
            "2016-01-02",
        ])
        .stdout(predicate::str::contains("Thu Jan  7 00:00:00 UTC 2016"));

    harness
        .run_success(&[
            "previous",
            "--every",
            "yearly",
            "--first",
            "2014-01-01",
            "--before",
            "2016-01-01",
        ])
        .stdout(predicate::str::contains("Thu Jan  1 00:00:00 UTC 2015"));

    harness
        .run_success(&[
            "next",
            "--every",
            "monthly",
            "--frequency",
            "2",
            "--first",
            "2016-01-10 18:00",
            "--after",
            "2016-01-10 18:01",
        ])
        .stdout(predicate::str::contains("Thu Mar 10 18:00:00 UTC 2016"));
}

#[test]
fn test_upcoming_table() {
    let harness = CliTestHarness::with_schedules(TestFixtures::first_and_third_monday());

    harness
        .run_success(&["upcoming", "--after", "2016-10-01", "--count", "3"])
        .stdout(predicate::str::contains("Mon Oct  3 19:00:00 UTC 2016"))
        .stdout(predicate::str::contains("Mon Oct 17 19:00:00 UTC 2016"))
        .stdout(predicate::str::contains("Mon Nov  7 19:00:00 UTC 2016"))
        .stdout(predicate::str::contains("Mon Nov 21 19:00:00 UTC 2016").not());

    harness
        .run_failure(&["upcoming", "--count", "0"])
        .stderr(predicate::str::contains("--count must be at least 1"));
}

#[test]
fn test_describe_schedules() {
    let harness = CliTestHarness::with_schedules(TestFixtures::first_and_third_monday());

    harness
        .run_success(&["describe"])
        .stdout(predicate::str::contains("Every 1st Monday, starting Sep 05 2016 at 7:00PM"))
        .stdout(predicate::str::contains("Every 3rd Monday, starting Sep 19 2016 at 7:00PM"));

    harness
        .run_success(&[
            "describe",
            "--every",
            "weekly",
            "--frequency",
            "2",
            "--first",
            "2016-09-14 18:00",
        ])
        .stdout(predicate::str::contains("Every 2 weeks"));
}

#[test]
fn test_empty_configuration() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&["next", "--after", "2016-01-01"])
        .stderr(predicate::str::contains("No schedules to search"));

    harness
        .run_failure(&["previous", "--before", "2016-01-01"])
        .stderr(predicate::str::contains("No meetings on or before this date"));

    harness
        .run_success(&["describe"])
        .stdout(predicate::str::contains("No schedules found."));
}

#[test]
fn test_invalid_configuration_entries() {
    let unknown_kind = CliTestHarness::with_schedules(
        r#"
[[schedules]]
name = "Sprint"
kind = "fortnightly"
first = "2016-01-01"
"#,
    );
    unknown_kind
        .run_failure(&["next", "--after", "2016-01-01"])
        .stderr(predicate::str::contains("Invalid schedule 'Sprint'"))
        .stderr(predicate::str::contains("Unknown schedule type: fortnightly"))
        .stderr(predicate::str::contains("monthly-by-weekday"));

    let zero_frequency = CliTestHarness::with_schedules(
        r#"
[[schedules]]
name = "Never"
kind = "daily"
first = "2016-01-01"
frequency = 0
"#,
    );
    zero_frequency
        .run_failure(&["next", "--after", "2016-01-01"])
        .stderr(predicate::str::contains("frequency must be at least 1"));
}

#[test]
fn test_invalid_arguments() {
    let harness = CliTestHarness::with_schedules(TestFixtures::first_and_third_monday());

    harness
        .run_failure(&["next", "--timezone", "Mars/Olympus"])
        .stderr(predicate::str::contains("Invalid timezone: Mars/Olympus"));

    harness
        .run_failure(&["next", "--after", "not a date at all"])
        .stderr(predicate::str::contains("Failed to parse date"));

    harness
        .run_failure(&[
            "next",
            "--every",
            "monthly-by-weekday",
            "--frequency",
            "2",
            "--first",
            "2016-09-14",
        ])
        .stderr(predicate::str::contains("frequency 2 is not supported"));

    harness
        .run_failure(&["next", "--every", "daily"])
        .stderr(assertions::has_error());
}

#[test]
fn test_timezones_listing() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["timezones"])
        .stdout(predicate::str::contains("Europe/Berlin"))
        .stdout(predicate::str::contains("Offset"));

    harness
        .run_success(&["timezones", "--filter", "america"])
        .stdout(predicate::str::contains("America/New_York"))
        .stdout(predicate::str::contains("Europe/Berlin").not());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let harness = CliTestHarness::with_schedules(TestFixtures::first_and_third_monday());

    harness
        .run_success(&["-v", "next", "--after", "2016-10-01"])
        .stdout(predicate::str::contains("Mon Oct  3 19:00:00 UTC 2016"))
        .stderr(predicate::str::contains("DEBUG"));
}
