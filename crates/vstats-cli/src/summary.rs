use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vstats_cli::pipeline::{ColumnKind, ColumnRow};
use vstats_model::StatsMethod;

use crate::commands::RunOutcome;

pub fn print_outcome(outcome: &RunOutcome) {
    if let Some(planned) = &outcome.planned {
        for line in planned {
            println!("{line}");
        }
        return;
    }
    let report = &outcome.report;
    if report.jobs.is_empty() {
        println!("No statistics columns computed.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Method"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for job in &report.jobs {
        table.add_row(vec![
            dim_cell(job.index + 1),
            Cell::new(&job.source_column),
            Cell::new(job.method.as_str()),
            Cell::new(&job.output_column)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");
    println!(
        "{} statistics column(s) in {:.2?}",
        report.completed(),
        report.elapsed
    );
}

pub fn print_columns(map: &str, layer: &str, rows: &[ColumnRow]) {
    println!("Map: {map} (layer {layer})");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Numeric"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(&row.sql_type),
            kind_cell(row.kind),
        ]);
    }
    println!("{table}");
}

pub fn print_methods() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Method"), header_cell("Description")]);
    apply_table_style(&mut table);
    for method in StatsMethod::ALL {
        table.add_row(vec![
            Cell::new(method.as_str()).add_attribute(Attribute::Bold),
            Cell::new(method.description()),
        ]);
    }
    println!("{table}");
}

fn kind_cell(kind: ColumnKind) -> Cell {
    match kind {
        ColumnKind::Integer => Cell::new("integer").fg(Color::Green),
        ColumnKind::Floating => Cell::new("floating").fg(Color::Green),
        ColumnKind::Other => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
