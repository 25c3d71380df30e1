use chrono::{DateTime, FixedOffset, NaiveDate};
use chrono_tz::Tz;
use serde_json::{Value, json};

use crate::consts::DATE_FORMAT;
use crate::output::DateReport;

fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub(crate) fn output_today_json(today: &DateTime<FixedOffset>) -> String {
    to_pretty(&json!({
        "today": today.to_rfc3339(),
        "date": today.format(DATE_FORMAT).to_string(),
        "utc_offset_seconds": today.offset().local_minus_utc(),
    }))
}

pub(crate) fn output_now_json(now: &DateTime<Tz>) -> String {
    to_pretty(&json!({
        "timezone": now.timezone().name(),
        "now": now.to_rfc3339(),
        "date": now.format(DATE_FORMAT).to_string(),
    }))
}

pub(crate) fn output_month_json(
    input: &str,
    start: NaiveDate,
    next_start: NaiveDate,
    range: &str,
) -> String {
    to_pretty(&json!({
        "input": input,
        "month_start": start.format(DATE_FORMAT).to_string(),
        "next_month_start": next_start.format(DATE_FORMAT).to_string(),
        "range": range,
    }))
}

pub(crate) fn output_info_json(report: &DateReport) -> String {
    to_pretty(&json!({
        "today": report.today.to_rfc3339(),
        "local_now": report.local_now.map(|dt| dt.to_rfc3339()),
        "timezone": report.local_now.map(|dt| dt.timezone().name()),
        "month_start": report.month_start.format(DATE_FORMAT).to_string(),
        "next_month_start": report.next_month_start.format(DATE_FORMAT).to_string(),
        "month_range": report.month_range,
        "debug": report.debug,
        "date_override": report.date_override,
        "override_active": report.override_active,
        "advance_override": report.advance_override,
        "last_accessed": report.last_accessed.map(|dt| dt.to_rfc3339()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn today_json_fields() {
        let today = DateTime::parse_from_rfc3339("2024-03-05T13:45:10-09:00").unwrap();
        let v: Value = serde_json::from_str(&output_today_json(&today)).unwrap();
        assert_eq!(v["today"], "2024-03-05T13:45:10-09:00");
        assert_eq!(v["date"], "2024-03-05");
        assert_eq!(v["utc_offset_seconds"], -9 * 3600);
    }

    #[test]
    fn now_json_names_timezone() {
        let utc = "2024-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let now = utc.with_timezone(&chrono_tz::America::New_York);
        let v: Value = serde_json::from_str(&output_now_json(&now)).unwrap();
        assert_eq!(v["timezone"], "America/New_York");
        assert_eq!(v["now"], "2024-06-15T08:00:00-04:00");
    }

    #[test]
    fn month_json_fields() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let next = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let v: Value = serde_json::from_str(&output_month_json(
            "2024-02-29",
            start,
            next,
            "20240201-20240301",
        ))
        .unwrap();
        assert_eq!(v["month_start"], "2024-02-01");
        assert_eq!(v["next_month_start"], "2024-03-01");
        assert_eq!(v["range"], "20240201-20240301");
        assert_eq!(v["input"], "2024-02-29");
    }
}
