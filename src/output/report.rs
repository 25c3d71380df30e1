use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::accessor::DateAccessor;
use crate::error::AppError;

/// Everything the info view shows, computed once.
#[derive(Debug, Clone)]
pub(crate) struct DateReport {
    pub(crate) today: DateTime<FixedOffset>,
    pub(crate) local_now: Option<DateTime<Tz>>,
    pub(crate) month_start: NaiveDate,
    pub(crate) next_month_start: NaiveDate,
    pub(crate) month_range: String,
    pub(crate) debug: bool,
    pub(crate) date_override: Option<String>,
    pub(crate) override_active: bool,
    pub(crate) advance_override: bool,
    pub(crate) last_accessed: Option<DateTime<Utc>>,
}

impl DateReport {
    pub(crate) fn build(accessor: &DateAccessor, timezone: Option<&str>) -> Result<Self, AppError> {
        let today = accessor.today()?;
        let local_now = timezone
            .map(|tz| accessor.today_with_timezone(tz))
            .transpose()?;
        let (month_start, next_month_start) = accessor.billing_month_range(today)?;
        let month_range = accessor.month_date_range(today)?;
        let settings = accessor.settings();

        Ok(DateReport {
            today,
            local_now,
            month_start,
            next_month_start,
            month_range,
            debug: settings.debug,
            date_override: settings.date_override.as_ref().map(ToString::to_string),
            override_active: settings.active_override().is_some(),
            advance_override: settings.advance_override,
            last_accessed: accessor.last_accessed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::clock::FixedClock;
    use crate::accessor::{DateOverride, DateSettings};
    use crate::utils::IanaTimezoneDb;

    fn accessor(settings: DateSettings) -> DateAccessor {
        DateAccessor::with_parts(
            settings,
            Box::new(FixedClock::at("2026-10-18T14:25:36Z")),
            Box::new(IanaTimezoneDb),
        )
    }

    #[test]
    fn report_with_active_override() {
        let acc = accessor(DateSettings {
            debug: true,
            date_override: Some(DateOverride::from("2024-12-24 20:00:00")),
            advance_override: false,
        });
        let report = DateReport::build(&acc, Some("Asia/Tokyo")).unwrap();

        assert_eq!(report.today.to_rfc3339(), "2024-12-24T20:00:00+00:00");
        assert_eq!(report.month_start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(
            report.next_month_start,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(report.month_range, "20241201-20250101");
        assert!(report.override_active);
        assert_eq!(report.date_override.as_deref(), Some("2024-12-24 20:00:00"));
        let local = report.local_now.unwrap();
        assert_eq!(local.timezone(), chrono_tz::Asia::Tokyo);
        assert_eq!(local.to_rfc3339(), "2026-10-18T23:25:36+09:00");
        assert_eq!(
            report.last_accessed.map(|t| t.to_rfc3339()).as_deref(),
            Some("2026-10-18T14:25:36+00:00")
        );
    }

    #[test]
    fn report_override_inactive_without_debug() {
        let acc = accessor(DateSettings {
            debug: false,
            date_override: Some(DateOverride::from("2024-12-24")),
            advance_override: false,
        });
        let report = DateReport::build(&acc, None).unwrap();
        assert!(!report.override_active);
        assert!(report.local_now.is_none());
        assert_eq!(report.month_range, "20261001-20261101");
    }

    #[test]
    fn report_fails_on_unknown_timezone() {
        let acc = accessor(DateSettings::default());
        let err = DateReport::build(&acc, Some("Moon/Mare Tranquillitatis")).unwrap_err();
        assert!(matches!(err, AppError::Accessor(_)));
    }
}
