mod format;
mod json;
mod report;
mod table;

pub(crate) use json::{output_info_json, output_month_json, output_now_json, output_today_json};
pub(crate) use report::DateReport;
pub(crate) use table::print_info_table;
