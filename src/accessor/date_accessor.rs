//! Current-date accessor
//!
//! "Today" for the billing pipeline, with a debug-only override and
//! billing month helpers.

use std::sync::Mutex;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;

use super::clock::{Clock, SystemClock};
use super::settings::DateSettings;
use crate::error::{AppError, DateAccessorError};
use crate::utils::{
    DateInput, IanaTimezoneDb, TimezoneDb, TimezoneInput, format_month_range, month_start,
    next_month_start,
};

pub(crate) struct DateAccessor {
    settings: DateSettings,
    clock: Box<dyn Clock>,
    timezones: Box<dyn TimezoneDb>,
    created_at: DateTime<Utc>,
    last_accessed: Mutex<Option<DateTime<Utc>>>,
}

impl DateAccessor {
    /// Accessor on the system clock and the bundled tz database.
    pub(crate) fn new(settings: DateSettings) -> Self {
        Self::with_parts(settings, Box::new(SystemClock), Box::new(IanaTimezoneDb))
    }

    pub(crate) fn with_parts(
        settings: DateSettings,
        clock: Box<dyn Clock>,
        timezones: Box<dyn TimezoneDb>,
    ) -> Self {
        let created_at = clock.now();
        DateAccessor {
            settings,
            clock,
            timezones,
            created_at,
            last_accessed: Mutex::new(None),
        }
    }

    pub(crate) fn settings(&self) -> &DateSettings {
        &self.settings
    }

    /// When `today` was last called.
    pub(crate) fn last_accessed(&self) -> Option<DateTime<Utc>> {
        self.last_accessed.lock().ok().and_then(|last| *last)
    }

    fn record_access(&self, now: DateTime<Utc>) {
        if let Ok(mut last) = self.last_accessed.lock() {
            *last = Some(now);
        }
    }

    /// The current instant, or the override when debug mode is on.
    ///
    /// A malformed override fails the call instead of falling back to the clock.
    pub(crate) fn today(&self) -> Result<DateTime<FixedOffset>, AppError> {
        let now = self.clock.now();
        self.record_access(now);

        let Some(date_override) = self.settings.active_override() else {
            if self.settings.date_override.is_some() {
                tracing::debug!("date override ignored: debug mode is off");
            }
            return Ok(now.fixed_offset());
        };

        let mut today = date_override.resolve()?;
        if self.settings.advance_override {
            let elapsed = now.signed_duration_since(self.created_at);
            today = today
                .checked_add_signed(elapsed)
                .ok_or_else(|| AppError::OutOfRange {
                    input: today.to_rfc3339(),
                })?;
        }
        tracing::debug!(today = %today.to_rfc3339(), "using date override");
        Ok(today)
    }

    /// The real current instant in the given zone.
    pub(crate) fn today_with_timezone<'a>(
        &self,
        tz: impl Into<TimezoneInput<'a>>,
    ) -> Result<DateTime<Tz>, DateAccessorError> {
        let tz = tz.into().resolve(self.timezones.as_ref())?;
        tracing::debug!(timezone = tz.name(), "resolved timezone");
        Ok(self.clock.now().with_timezone(&tz))
    }

    /// First day of the billing month containing `value`.
    pub(crate) fn get_billing_month_start(
        &self,
        value: impl Into<DateInput>,
    ) -> Result<NaiveDate, AppError> {
        let (start, _) = self.billing_month_range(value)?;
        Ok(start)
    }

    /// Billing month start and the start of the following month.
    pub(crate) fn billing_month_range(
        &self,
        value: impl Into<DateInput>,
    ) -> Result<(NaiveDate, NaiveDate), AppError> {
        let input = value.into();
        let date = input
            .normalize()
            .ok_or_else(|| AppError::InvalidDate {
                input: input.describe(),
            })?
            .date();
        let out_of_range = || AppError::OutOfRange {
            input: input.describe(),
        };
        let start = month_start(date).ok_or_else(out_of_range)?;
        let end = next_month_start(date).ok_or_else(out_of_range)?;
        Ok((start, end))
    }

    /// Billing month as `YYYYMMDD-YYYYMMDD`.
    pub(crate) fn month_date_range(&self, value: impl Into<DateInput>) -> Result<String, AppError> {
        let (start, end) = self.billing_month_range(value)?;
        Ok(format_month_range(start, end))
    }
}
