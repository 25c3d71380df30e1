use chrono::{DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, TimeZone};

use crate::consts::COMPACT_DATE_FORMAT;

/// A date-like value as it was parsed, before any timezone is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParsedDate {
    Date(NaiveDate),
    Naive(NaiveDateTime),
    Aware(DateTime<FixedOffset>),
}

impl ParsedDate {
    /// Calendar date in the value's own offset.
    pub(crate) fn date(self) -> NaiveDate {
        match self {
            ParsedDate::Date(d) => d,
            ParsedDate::Naive(dt) => dt.date(),
            ParsedDate::Aware(dt) => dt.date_naive(),
        }
    }
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const AWARE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M%:z",
];

/// Parse a date, date-time or offset-carrying timestamp.
///
/// Offsets are kept as written; nothing is normalized to UTC here.
pub(crate) fn parse_datetime_input(raw: &str) -> Option<ParsedDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(dt) = parse_aware_datetime(s) {
        return Some(ParsedDate::Aware(dt));
    }
    if let Some(expanded) = expand_hour_offset(s)
        && let Some(dt) = parse_aware_datetime(&expanded)
    {
        return Some(ParsedDate::Aware(dt));
    }

    // "2024-03-05 13:45:10 UTC" as printed by DateTime<Utc>
    if let Some(rest) = s.strip_suffix(" UTC").or_else(|| s.strip_suffix('Z'))
        && let Some(naive) = parse_naive_datetime(rest.trim_end())
    {
        return Some(ParsedDate::Aware(
            FixedOffset::east_opt(0)?.from_utc_datetime(&naive),
        ));
    }

    if let Some(naive) = parse_naive_datetime(s) {
        return Some(ParsedDate::Naive(naive));
    }

    parse_date(s).map(ParsedDate::Date)
}

fn parse_aware_datetime(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    AWARE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
}

/// "13:45:10+05" -> "13:45:10+05:00". Only applies after a time of day.
fn expand_hour_offset(s: &str) -> Option<String> {
    let (head, tail) = s.split_at_checked(s.len().checked_sub(3)?)?;
    let mut chars = tail.chars();
    let sign = chars.next()?;
    if !matches!(sign, '+' | '-') || !chars.all(|c| c.is_ascii_digit()) || !head.contains(':') {
        return None;
    }
    Some(format!("{head}{tail}:00"))
}

fn parse_naive_datetime(s: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parse YYYY-MM-DD or YYYYMMDD.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, COMPACT_DATE_FORMAT)
    {
        return Some(d);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Any value `get_billing_month_start` understands.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DateInput {
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<FixedOffset>),
}

impl DateInput {
    /// Strings are parsed first, then treated like the typed shapes.
    pub(crate) fn normalize(&self) -> Option<ParsedDate> {
        match self {
            DateInput::Text(s) => parse_datetime_input(s),
            DateInput::Date(d) => Some(ParsedDate::Date(*d)),
            DateInput::DateTime(dt) => Some(ParsedDate::Naive(*dt)),
            DateInput::Timestamp(dt) => Some(ParsedDate::Aware(*dt)),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            DateInput::Text(s) => s.clone(),
            DateInput::Date(d) => d.to_string(),
            DateInput::DateTime(dt) => dt.to_string(),
            DateInput::Timestamp(dt) => dt.to_rfc3339(),
        }
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        DateInput::Date(d)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::DateTime(dt)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(dt: DateTime<Tz>) -> Self {
        DateInput::Timestamp(dt.fixed_offset())
    }
}

/// First calendar day of the month containing `date`.
pub(crate) fn month_start(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

/// First calendar day of the following month.
pub(crate) fn next_month_start(date: NaiveDate) -> Option<NaiveDate> {
    month_start(date)?.checked_add_months(Months::new(1))
}

/// Render a billing month as `YYYYMMDD-YYYYMMDD` (start, next month start).
pub(crate) fn format_month_range(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}-{}",
        start.format(COMPACT_DATE_FORMAT),
        end.format(COMPACT_DATE_FORMAT)
    )
}
