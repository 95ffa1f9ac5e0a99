use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use textnorm_core::{ColumnSelection, StandardizeOptions};

use crate::cli::ReportFormatArg;
use crate::types::StandardizeOutcome;

pub fn print_summary(outcome: &StandardizeOutcome, format: ReportFormatArg) -> Result<()> {
    match format {
        ReportFormatArg::Json => println!("{}", render_json(outcome)?),
        ReportFormatArg::Table => {
            println!("{}", summary_table(outcome));
            if let Some(table) = rename_table(outcome) {
                println!();
                println!("Renamed headers:");
                println!("{table}");
            }
        }
    }
    Ok(())
}

pub fn render_json(outcome: &StandardizeOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

fn summary_table(outcome: &StandardizeOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Output"),
        header_cell("Rows"),
        header_cell("Selection"),
        header_cell("Columns"),
        header_cell("Values"),
        header_cell("Headers renamed"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);

    let output_cell = match &outcome.output {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("dry run"),
    };
    let selection = match &outcome.options.columns {
        ColumnSelection::Auto => "text columns",
        ColumnSelection::Explicit(_) => "explicit",
    };
    table.add_row(vec![
        Cell::new(outcome.input.display()),
        output_cell,
        Cell::new(outcome.report.rows),
        Cell::new(selection),
        count_cell(outcome.report.columns.len()),
        values_cell(&outcome.options),
        count_cell(outcome.report.renamed_headers.len()),
    ]);
    table
}

fn values_cell(options: &StandardizeOptions) -> Cell {
    let label = values_label(options);
    if options.rewrites_values() {
        Cell::new(label)
    } else {
        dim_cell(label)
    }
}

fn values_label(options: &StandardizeOptions) -> &'static str {
    if !options.rewrites_values() {
        return "untouched";
    }
    match (options.strip, options.lower) {
        (true, true) => "trim, lower",
        (true, false) => "trim",
        _ => "lower",
    }
}

fn rename_table(outcome: &StandardizeOutcome) -> Option<Table> {
    if outcome.report.renamed_headers.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("From"), header_cell("To")]);
    apply_table_style(&mut table);
    for rename in &outcome.report.renamed_headers {
        // Debug formatting keeps surrounding whitespace visible.
        table.add_row(vec![
            Cell::new(format!("{:?}", rename.from)),
            Cell::new(&rename.to).fg(Color::Blue),
        ]);
    }
    Some(table)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
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

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
