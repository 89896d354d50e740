//! Terminal and JSON rendering of computed results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use inflammation_model::MeasurementTable;
use inflammation_stats::DailySummary;
use serde::Serialize;

/// One row per day with its mean, max, min and standard deviation.
pub fn daily_summary_table(summary: &DailySummary, precision: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Day"),
        header_cell("Mean"),
        header_cell("Max"),
        header_cell("Min"),
        header_cell("Std Dev"),
    ]);
    apply_table_style(&mut table);
    for index in 0..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for day in 0..summary.n_days() {
        table.add_row(vec![
            Cell::new(day),
            value_cell(summary.mean[day], precision),
            value_cell(summary.max[day], precision),
            value_cell(summary.min[day], precision),
            value_cell(summary.standard_deviation[day], precision),
        ]);
    }
    table
}

/// One row per patient, one column per day.
pub fn normalised_table(normalised: &MeasurementTable, precision: usize) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Patient")];
    header.extend((0..normalised.n_columns()).map(|day| header_cell(&format!("Day {day}"))));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 0..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (patient, row) in normalised.rows().iter().enumerate() {
        let mut cells = vec![Cell::new(patient)];
        cells.extend(row.iter().map(|value| ratio_cell(*value, precision)));
        table.add_row(cells);
    }
    table
}

/// Pretty-printed JSON for machine consumption.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: f64, precision: usize) -> Cell {
    Cell::new(format!("{value:.precision$}"))
}

/// Peaks are highlighted, zeros dimmed.
fn ratio_cell(value: f64, precision: usize) -> Cell {
    let cell = value_cell(value, precision);
    if value >= 1.0 {
        cell.fg(Color::Green).add_attribute(Attribute::Bold)
    } else if value == 0.0 {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}
