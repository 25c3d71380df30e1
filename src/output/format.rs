use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

/// Yes/no cell, green when set.
pub(super) fn flag_cell(value: bool, use_color: bool) -> Cell {
    let (text, color) = if value {
        ("yes", Color::Green)
    } else {
        ("no", Color::DarkGrey)
    };
    styled_cell(text, use_color.then_some(color), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_table_uses_single_header_line() {
        let mut table = create_styled_table();
        table.set_header(vec![header_cell("Field", false), header_cell("Value", false)]);
        table.add_row(vec![Cell::new("a"), Cell::new("b")]);
        let rendered = table.to_string();
        assert!(rendered.contains('├'));
        assert!(!rendered.contains('╞'));
    }

    #[test]
    fn flag_cell_text() {
        let mut table = Table::new();
        table.add_row(vec![flag_cell(true, false), flag_cell(false, false)]);
        let rendered = table.to_string();
        assert!(rendered.contains("yes"));
        assert!(rendered.contains("no"));
    }
}
