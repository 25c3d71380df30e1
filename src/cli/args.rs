//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::accessor::{DateOverride, DateSettings};
use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "datekeeper")]
#[command(about = "Current date for billing, with debug overrides", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Enable debug mode (allows the date override, shows processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Substitute date for "today" in debug mode (YYYY-MM-DD, YYYY-MM-DD HH:MM:SS or ISO 8601)
    #[arg(long, global = true, value_name = "DATE")]
    pub(crate) date_override: Option<String>,

    /// Let the override tick forward with wall-clock time elapsed since startup.
    /// Off by default, so the override stays a fixed instant
    #[arg(long, global = true)]
    pub(crate) advance_override: bool,

    /// Timezone for the info view (e.g., "Asia/Shanghai", "UTC", "America/New_York")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.advance_override && config.advance_override {
            self.advance_override = true;
        }

        if let Some(color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // String options: only apply if CLI didn't set them
        if self.date_override.is_none() {
            self.date_override = config.date_override.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn date_settings(&self) -> DateSettings {
        DateSettings {
            debug: self.debug,
            date_override: self.date_override.clone().map(DateOverride::from),
            advance_override: self.advance_override,
        }
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("datekeeper").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn config_fills_unset_flags() {
        let config = Config {
            debug: true,
            date_override: Some("2024-02-10".to_string()),
            advance_override: true,
            timezone: Some("Europe/Berlin".to_string()),
            color: Some(ConfigColorMode::Never),
        };
        let cli = parse(&["today"]).with_config(&config);
        assert!(cli.debug);
        assert!(cli.advance_override);
        assert_eq!(cli.date_override.as_deref(), Some("2024-02-10"));
        assert_eq!(cli.timezone.as_deref(), Some("Europe/Berlin"));
        assert_eq!(cli.color, ColorMode::Never);
    }

    #[test]
    fn cli_values_win_over_config() {
        let config = Config {
            date_override: Some("2024-02-10".to_string()),
            timezone: Some("Europe/Berlin".to_string()),
            color: Some(ConfigColorMode::Never),
            ..Config::default()
        };
        let cli = parse(&[
            "--date-override",
            "2030-01-01",
            "--timezone",
            "UTC",
            "--color",
            "always",
        ])
        .with_config(&config);
        assert_eq!(cli.date_override.as_deref(), Some("2030-01-01"));
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.color, ColorMode::Always);
    }

    #[test]
    fn date_settings_from_flags() {
        let cli = parse(&["--debug", "--date-override", "2024-02-10", "today"]);
        let settings = cli.date_settings();
        assert!(settings.debug);
        assert_eq!(
            settings.date_override,
            Some(DateOverride::Text("2024-02-10".to_string()))
        );
        assert!(!settings.advance_override);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["month-start", "2024-02-10", "--json"]);
        assert!(cli.json);
        assert_eq!(
            cli.command,
            Some(Commands::MonthStart {
                value: "2024-02-10".to_string()
            })
        );
    }

    #[test]
    fn advance_override_help_describes_default() {
        use clap::CommandFactory;

        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == "advance_override")
            .unwrap();
        let help = arg.get_help().unwrap().to_string();
        assert!(help.contains("wall-clock time"), "{help}");
        assert!(help.contains("fixed instant"), "{help}");
    }

    #[test]
    fn no_color_disables_color() {
        let cli = parse(&["--no-color", "--color", "always"]);
        assert!(!cli.use_color());
    }
}
