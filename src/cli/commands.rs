//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Subcommand, PartialEq)]
pub(crate) enum Commands {
    /// Show today's date and time (default)
    Today,
    /// Show the current time in a timezone
    Now {
        /// IANA timezone name (e.g., "UTC", "America/New_York")
        timezone: String,
    },
    /// Show the billing month start for a date or timestamp
    MonthStart {
        /// Date, date-time or ISO 8601 timestamp
        value: String,
    },
    /// Show the billing month range (YYYYMMDD-YYYYMMDD)
    MonthRange {
        /// Date, date-time or ISO 8601 timestamp
        value: String,
    },
    /// Show today, the current billing month and override state
    Info,
}

impl Commands {
    /// Command to run when none is given
    pub(crate) fn or_default(cmd: Option<&Commands>) -> Commands {
        cmd.cloned().unwrap_or(Commands::Today)
    }
}
