use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use edigen_report::RunReport;

pub fn print_summary(report: &RunReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Scenario"),
        header_cell("Artifact"),
        header_cell("Path"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for artifact in &report.artifacts {
        let scenario_cell = if artifact.scenario == "-" {
            dim_cell(&artifact.scenario)
        } else {
            Cell::new(&artifact.scenario)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        };
        table.add_row(vec![
            scenario_cell,
            Cell::new(&artifact.description),
            Cell::new(artifact.path.display()),
        ]);
    }
    println!("{table}");
    println!(
        "{} artifacts, {} errors, {} warnings",
        report.artifacts.len(),
        report.error_count(),
        report.warning_count()
    );

    print_section("Design sheet errors", &report.sheet_errors);
    print_section("Catalog resolution errors", &report.resolution_errors);
    print_section("Design archive errors", &report.archive_errors);
    print_section("Generation errors", &report.generation_errors);
    print_section("Structure warnings", &report.structure_warnings);
}

fn print_section(title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    eprintln!("{title}:");
    for entry in entries {
        eprintln!("- {entry}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
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
