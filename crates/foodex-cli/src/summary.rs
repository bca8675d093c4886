use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use foodex_rules::Severity;

use crate::cli::OutputFormatArg;
use crate::commands::{CheckResult, CodeResult};

pub fn print_results(result: &CheckResult) -> Result<()> {
    match result.format {
        OutputFormatArg::Table => {
            print_table(&result.results);
            Ok(())
        }
        OutputFormatArg::Json => print_json_lines(&result.results),
    }
}

fn print_json_lines(results: &[CodeResult]) -> Result<()> {
    for result in results {
        println!("{}", serde_json::to_string(result)?);
    }
    Ok(())
}

fn print_table(results: &[CodeResult]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Code"),
        header_cell("Indicator"),
        header_cell("Text"),
        header_cell("Messages"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);

    for result in results {
        let (indicator, text, messages) = match (&result.report, &result.error) {
            (Some(report), _) => (
                severity_cell(report.indicator),
                severity_cell(report.text),
                Cell::new(
                    report
                        .messages
                        .iter()
                        .map(|m| m.message.as_str())
                        .collect::<Vec<_>>()
                        .join("\n"),
                ),
            ),
            (None, error) => (
                severity_cell(Severity::Error),
                severity_cell(Severity::Error),
                Cell::new(error.as_deref().unwrap_or_default()).fg(Color::Red),
            ),
        };
        table.add_row(vec![
            dim_cell(result.line),
            Cell::new(&result.code).add_attribute(Attribute::Bold),
            indicator,
            text,
            messages,
        ]);
    }
    println!("{table}");

    let failures = results.iter().filter(|r| r.is_failure()).count();
    println!("{} codes checked, {failures} rejected", results.len());
}

pub fn apply_table_style(table: &mut Table) {
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

pub fn severity_cell(severity: Severity) -> Cell {
    let cell = Cell::new(severity.label());
    match severity {
        Severity::None => cell.fg(Color::Green),
        Severity::Low => cell.fg(Color::Yellow),
        Severity::High => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        Severity::Error => cell.fg(Color::Magenta).add_attribute(Attribute::Bold),
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
