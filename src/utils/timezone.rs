use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::DateAccessorError;

/// Lookup of IANA timezones by name.
pub(crate) trait TimezoneDb: Send + Sync {
    fn lookup(&self, name: &str) -> Option<Tz>;

    /// Resolve a name, failing with [`DateAccessorError::UnknownTimezone`].
    fn resolve(&self, name: &str) -> Result<Tz, DateAccessorError> {
        let trimmed = name.trim();
        self.lookup(trimmed)
            .ok_or_else(|| DateAccessorError::UnknownTimezone {
                input: trimmed.to_string(),
            })
    }
}

/// The compiled-in tz database shipped with `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct IanaTimezoneDb;

impl TimezoneDb for IanaTimezoneDb {
    fn lookup(&self, name: &str) -> Option<Tz> {
        if name.is_empty() {
            return None;
        }
        if name.eq_ignore_ascii_case("utc") || name.eq_ignore_ascii_case("z") {
            return Some(chrono_tz::UTC);
        }
        Tz::from_str(name).ok()
    }
}

/// A timezone given either by name or as an already resolved zone.
#[derive(Debug, Clone)]
pub(crate) enum TimezoneInput<'a> {
    Name(&'a str),
    Zone(Tz),
}

impl TimezoneInput<'_> {
    pub(crate) fn resolve(&self, db: &dyn TimezoneDb) -> Result<Tz, DateAccessorError> {
        match self {
            TimezoneInput::Name(name) => db.resolve(name),
            TimezoneInput::Zone(tz) => Ok(*tz),
        }
    }
}

impl<'a> From<&'a str> for TimezoneInput<'a> {
    fn from(name: &'a str) -> Self {
        TimezoneInput::Name(name)
    }
}

impl<'a> From<&'a String> for TimezoneInput<'a> {
    fn from(name: &'a String) -> Self {
        TimezoneInput::Name(name.as_str())
    }
}

impl From<Tz> for TimezoneInput<'_> {
    fn from(tz: Tz) -> Self {
        TimezoneInput::Zone(tz)
    }
}
