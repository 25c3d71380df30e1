use comfy_table::{Cell, Color};

use crate::consts::DATE_FORMAT;
use crate::output::DateReport;
use crate::output::format::{create_styled_table, flag_cell, header_cell, styled_cell};

fn info_rows(report: &DateReport, use_color: bool) -> Vec<(String, Cell)> {
    let highlight = |color: Color| use_color.then_some(color);
    let mut rows = vec![(
        "Today".to_string(),
        styled_cell(
            &report.today.to_rfc3339(),
            highlight(if report.override_active {
                Color::Yellow
            } else {
                Color::Green
            }),
            true,
        ),
    )];

    if let Some(local) = report.local_now {
        rows.push((
            format!("Now ({})", local.timezone().name()),
            Cell::new(local.to_rfc3339()),
        ));
    }

    rows.push((
        "Billing month start".to_string(),
        Cell::new(report.month_start.format(DATE_FORMAT)),
    ));
    rows.push((
        "Next month start".to_string(),
        Cell::new(report.next_month_start.format(DATE_FORMAT)),
    ));
    rows.push(("Month range".to_string(), Cell::new(&report.month_range)));
    rows.push(("Debug".to_string(), flag_cell(report.debug, use_color)));
    rows.push((
        "Date override".to_string(),
        match &report.date_override {
            Some(raw) if report.override_active => styled_cell(raw, highlight(Color::Yellow), false),
            Some(raw) => styled_cell(&format!("{raw} (ignored)"), highlight(Color::DarkGrey), false),
            None => styled_cell("-", highlight(Color::DarkGrey), false),
        },
    ));
    if report.override_active {
        rows.push((
            "Advance override".to_string(),
            flag_cell(report.advance_override, use_color),
        ));
    }
    if let Some(last) = report.last_accessed {
        rows.push((
            "Last accessed".to_string(),
            styled_cell(&last.to_rfc3339(), highlight(Color::DarkGrey), false),
        ));
    }
    rows
}

pub(crate) fn print_info_table(report: &DateReport, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Field", use_color), header_cell("Value", use_color)]);
    for (label, value) in info_rows(report, use_color) {
        table.add_row(vec![Cell::new(label), value]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate};

    fn report(override_active: bool) -> DateReport {
        DateReport {
            today: DateTime::parse_from_rfc3339("2024-12-24T20:00:00+00:00").unwrap(),
            local_now: None,
            month_start: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            next_month_start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            month_range: "20241201-20250101".to_string(),
            debug: override_active,
            date_override: Some("2024-12-24 20:00:00".to_string()),
            override_active,
            advance_override: false,
            last_accessed: Some("2026-10-18T14:25:36Z".parse().unwrap()),
        }
    }

    #[test]
    fn rows_include_billing_month() {
        let labels: Vec<String> = info_rows(&report(true), false)
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert!(labels.contains(&"Billing month start".to_string()));
        assert!(labels.contains(&"Advance override".to_string()));
        assert!(labels.contains(&"Last accessed".to_string()));
        assert!(!labels.iter().any(|l| l.starts_with("Now (")));
    }

    #[test]
    fn ignored_override_is_marked() {
        let mut table = create_styled_table();
        for (label, value) in info_rows(&report(false), false) {
            table.add_row(vec![Cell::new(label), value]);
        }
        assert!(table.to_string().contains("(ignored)"));
    }
}
