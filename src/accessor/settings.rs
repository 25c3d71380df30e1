use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveTime};

use crate::error::AppError;
use crate::utils::{ParsedDate, parse_datetime_input};

/// A debug-only substitute for the real current date.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DateOverride {
    /// Date-only, date-time, or ISO 8601 text.
    Text(String),
    Instant(DateTime<FixedOffset>),
}

impl DateOverride {
    /// Turn the override into an instant.
    ///
    /// Values without an offset are taken as UTC; an explicit offset is kept.
    pub(crate) fn resolve(&self) -> Result<DateTime<FixedOffset>, AppError> {
        let raw = match self {
            DateOverride::Instant(dt) => return Ok(*dt),
            DateOverride::Text(raw) => raw,
        };
        let invalid = || AppError::InvalidOverride {
            input: raw.clone(),
        };
        match parse_datetime_input(raw).ok_or_else(invalid)? {
            ParsedDate::Aware(dt) => Ok(dt),
            ParsedDate::Naive(naive) => Ok(naive.and_utc().fixed_offset()),
            ParsedDate::Date(date) => Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset()),
        }
    }
}

impl fmt::Display for DateOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOverride::Text(raw) => f.write_str(raw),
            DateOverride::Instant(dt) => f.write_str(&dt.to_rfc3339()),
        }
    }
}

impl From<&str> for DateOverride {
    fn from(raw: &str) -> Self {
        DateOverride::Text(raw.to_string())
    }
}

impl From<String> for DateOverride {
    fn from(raw: String) -> Self {
        DateOverride::Text(raw)
    }
}

impl<Tz: chrono::TimeZone> From<DateTime<Tz>> for DateOverride {
    fn from(dt: DateTime<Tz>) -> Self {
        DateOverride::Instant(dt.fixed_offset())
    }
}

/// Flags controlling what "today" means.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct DateSettings {
    pub(crate) debug: bool,
    /// Ignored unless `debug` is set.
    pub(crate) date_override: Option<DateOverride>,
    /// Let an override tick forward with real time elapsed since the
    /// accessor was created. Off: the override is a fixed instant.
    pub(crate) advance_override: bool,
}

impl DateSettings {
    /// The override that is actually in effect.
    pub(crate) fn active_override(&self) -> Option<&DateOverride> {
        if self.debug {
            self.date_override.as_ref()
        } else {
            None
        }
    }
}
