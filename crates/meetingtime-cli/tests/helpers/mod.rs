use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands against a temporary configuration file
pub struct CliTestHarness {
    // Dropping the directory removes the configuration
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl CliTestHarness {
    /// Harness with no configured schedules and a UTC display timezone
    pub fn new() -> Self {
        Self::with_schedules("")
    }

    /// Harness whose configuration contains the given `[[schedules]]` TOML
    pub fn with_schedules(schedules_toml: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("meetingtime.toml");
        fs::write(
            &config_path,
            format!("default_timezone = \"UTC\"\n\n{}", schedules_toml),
        )
        .expect("Failed to write config");

        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("meetingtime").expect("Failed to find meetingtime binary");
        cmd.env("MEETINGTIME_CONFIG", &self.config_path)
            .env_remove("MEETINGTIME_DEFAULT_TIMEZONE")
            .env_remove("MEETINGTIME_SCHEDULES")
            .env_remove("MEETINGTIME_LOG");
        cmd
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Common configuration fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// A club meeting on the 1st and 3rd Monday of each month at 19:00 UTC
    pub fn first_and_third_monday() -> &'static str {
        r#"
[[schedules]]
name = "First Monday"
kind = "monthly-by-weekday"
first = "2016-09-05T19:00:00Z"

[[schedules]]
name = "Third Monday"
kind = "monthly-by-weekday"
first = "2016-09-19T19:00:00Z"
"#
    }

    /// 2nd Wednesday and 3rd Tuesday of each month at 18:00 UTC
    pub fn wednesday_and_tuesday() -> &'static str {
        r#"
[[schedules]]
name = "Book club"
kind = "monthly-by-weekday"
first = "2016-09-14 18:00"

[[schedules]]
name = "Board"
kind = "monthly-by-weekday"
first = "2016-09-20 18:00"
"#
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains an error
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}
