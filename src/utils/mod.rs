pub(crate) mod date;
pub(crate) mod logging;
pub(crate) mod timezone;

pub(crate) use date::{
    DateInput, ParsedDate, format_month_range, month_start, next_month_start, parse_datetime_input,
};
pub(crate) use logging::init_tracing;
pub(crate) use timezone::{IanaTimezoneDb, TimezoneDb, TimezoneInput};
