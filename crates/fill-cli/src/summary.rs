//! Table rendering for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fill_map::{ConfidenceLevel, ConfidenceThresholds};
use fill_model::{DocumentRecord, DocumentStatus, FieldMapping, MappingReport, MappingSet, MatchKind};
use fill_query::Page;

use crate::commands::FillRow;

pub fn print_mapping_summary(set: &MappingSet) {
    println!("Template: {}", set.template_id);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Data key"),
        header_cell("Confidence"),
        header_cell("Kind"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for mapping in &set.mappings {
        table.add_row(vec![
            Cell::new(&mapping.form_field),
            match &mapping.document_field {
                Some(key) => Cell::new(key),
                None => dim_cell("-"),
            },
            confidence_cell(mapping),
            kind_cell(mapping),
        ]);
    }
    println!("{table}");
    println!(
        "{} of {} fields matched",
        set.matched_count(),
        set.mappings.len()
    );
    if !set.unmatched_fields.is_empty() {
        println!("Unmatched: {}", set.unmatched_fields.join(", "));
    }
}

pub fn print_validation_report(report: &MappingReport) {
    if report.valid {
        println!("Mapping set is valid.");
        return;
    }
    println!("Mapping set has {} problem(s):", report.error_count());
    for error in &report.errors {
        println!("- {error}");
    }
}

pub fn print_fill_rows(rows: &[FillRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Data key"),
        header_cell("Value"),
        header_cell("Note"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.field),
            dim_cell(row.field_type),
            match &row.key {
                Some(key) => Cell::new(key),
                None => dim_cell("-"),
            },
            match &row.value {
                Some(value) => Cell::new(value),
                None => dim_cell("-"),
            },
            match row.note {
                Some(note) => Cell::new(note).fg(Color::Yellow),
                None => dim_cell(""),
            },
        ]);
    }
    println!("{table}");
}

pub fn print_record_page(page: &Page<DocumentRecord>, current_page: usize) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Status"),
        header_cell("Created"),
        header_cell("Tags"),
    ]);
    apply_table_style(&mut table);
    for record in &page.data {
        table.add_row(vec![
            Cell::new(&record.id),
            Cell::new(&record.name),
            status_cell(record.status),
            Cell::new(record.created_at.format("%Y-%m-%d %H:%M").to_string()),
            if record.tags.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(record.tags.join(", "))
            },
        ]);
    }
    println!("{table}");
    println!(
        "page {} of {} ({} records)",
        current_page, page.total_pages, page.total
    );
}

fn confidence_cell(mapping: &FieldMapping) -> Cell {
    if !mapping.is_matched() {
        return dim_cell("-");
    }
    let cell = Cell::new(format!("{:.2}", mapping.confidence));
    match ConfidenceThresholds::default().categorize(mapping.confidence) {
        Some(ConfidenceLevel::High) => cell.fg(Color::Green),
        Some(ConfidenceLevel::Medium) => cell.fg(Color::Yellow),
        Some(ConfidenceLevel::Low) => cell.fg(Color::Red),
        None => cell.fg(Color::DarkGrey),
    }
}

fn kind_cell(mapping: &FieldMapping) -> Cell {
    if mapping.manual_override {
        return Cell::new("manual").fg(Color::Cyan);
    }
    match mapping.match_kind {
        Some(MatchKind::Exact) => Cell::new("exact"),
        Some(MatchKind::Pattern) => Cell::new("pattern"),
        Some(MatchKind::Fuzzy) => Cell::new("fuzzy"),
        None => dim_cell("-"),
    }
}

fn status_cell(status: DocumentStatus) -> Cell {
    let cell = Cell::new(status.as_str());
    match status {
        DocumentStatus::Done => cell.fg(Color::Green),
        DocumentStatus::Processing => cell.fg(Color::Yellow),
        DocumentStatus::Failed => cell.fg(Color::Red),
        DocumentStatus::Pending => cell,
        DocumentStatus::Archived => cell.fg(Color::DarkGrey),
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
