//! Command runners for the IntelliFill CLI.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use fill_cli::logging::redact_value;
use fill_map::{MappingEngine, MappingRepository, typecheck, validate_mappings};
use fill_model::{DataBag, DocumentRecord, FieldType, FormField, MappingReport, MappingSet};
use fill_query::{ListFilter, ListQuery, SortDirection, SortField, SortSpec, run_query};

use crate::cli::{DirectionArg, FillArgs, ListArgs, MapArgs, SortByArg, ValidateArgs};
use crate::summary::{print_fill_rows, print_mapping_summary, print_record_page};

/// One resolved fill row for display.
pub struct FillRow {
    pub field: String,
    pub field_type: FieldType,
    pub key: Option<String>,
    pub value: Option<String>,
    pub note: Option<&'static str>,
}

pub fn run_map(args: &MapArgs) -> Result<()> {
    let form_fields: Vec<FormField> = read_json(&args.form, "form schema")?;
    let bag: DataBag = read_json(&args.data, "data bag")?;

    let engine = match args.threshold {
        Some(threshold) => MappingEngine::with_threshold(threshold),
        None => MappingEngine::default(),
    };
    let template_id = args
        .template
        .clone()
        .unwrap_or_else(|| template_id_from_path(&args.form));

    info!(
        template = %template_id,
        fields = form_fields.len(),
        keys = bag.len(),
        "generating auto-mappings"
    );
    let set = engine.generate_set(&template_id, &form_fields, &bag);
    print_mapping_summary(&set);

    if let Some(out) = &args.out {
        write_json(out, &set, "mapping set")?;
        println!("Mapping set written to {}", out.display());
    }
    if let Some(repo_dir) = &args.repo {
        let repo = MappingRepository::new(repo_dir)?;
        let path = repo.save(&set)?;
        println!("Mapping set saved to {}", path.display());
    }
    Ok(())
}

pub fn run_fill(args: &FillArgs) -> Result<()> {
    let form_fields: Vec<FormField> = read_json(&args.form, "form schema")?;
    let bag: DataBag = read_json(&args.data, "data bag")?;
    let set: MappingSet = read_json(&args.mapping, "mapping set")?;

    let mut rows = Vec::new();
    let mut values = BTreeMap::new();
    for field in &form_fields {
        let effective_type = if field.field_type == FieldType::Unknown {
            typecheck::infer_field_type(&field.name)
        } else {
            field.field_type
        };
        let key = set
            .mapping_for(&field.name)
            .and_then(|m| m.document_field.as_deref());
        let row = match key {
            Some(key) => match bag.get(key) {
                Some(value) => {
                    let note = if typecheck::value_matches_type(effective_type, value) {
                        None
                    } else {
                        warn!(
                            field = %field.name,
                            value = redact_value(value),
                            expected = %effective_type,
                            "value does not match the field type"
                        );
                        Some("format mismatch")
                    };
                    values.insert(field.name.clone(), value.to_string());
                    FillRow {
                        field: field.name.clone(),
                        field_type: effective_type,
                        key: Some(key.to_string()),
                        value: Some(value.to_string()),
                        note,
                    }
                }
                None => {
                    // The bag changed after the mapping was made
                    warn!(field = %field.name, key = %key, "mapped key missing from data bag");
                    FillRow {
                        field: field.name.clone(),
                        field_type: effective_type,
                        key: Some(key.to_string()),
                        value: None,
                        note: Some("stale key"),
                    }
                }
            },
            None => FillRow {
                field: field.name.clone(),
                field_type: effective_type,
                key: None,
                value: None,
                note: Some("no mapping"),
            },
        };
        rows.push(row);
    }

    print_fill_rows(&rows);
    println!(
        "{} of {} fields filled",
        values.len(),
        form_fields.len()
    );

    if let Some(out) = &args.out {
        write_json(out, &values, "filled values")?;
        println!("Filled values written to {}", out.display());
    }
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<MappingReport> {
    let form_fields: Vec<FormField> = read_json(&args.form, "form schema")?;
    let set: MappingSet = read_json(&args.mapping, "mapping set")?;
    Ok(validate_mappings(&form_fields, &set.mappings))
}

pub fn run_list(args: &ListArgs) -> Result<()> {
    let records: Vec<DocumentRecord> = read_json(&args.records, "document records")?;

    let query = ListQuery {
        filter: ListFilter {
            search: args.search.clone(),
            status: args.status,
            tags: args.tags.clone(),
            created_after: None,
            created_before: None,
        },
        sort: args.sort_by.map(|field| SortSpec {
            field: match field {
                SortByArg::Name => SortField::Name,
                SortByArg::Created => SortField::CreatedAt,
                SortByArg::Status => SortField::Status,
                SortByArg::Id => SortField::Id,
            },
            direction: match args.direction {
                DirectionArg::Asc => SortDirection::Asc,
                DirectionArg::Desc => SortDirection::Desc,
            },
        }),
        page: args.page,
        page_size: args.page_size,
    };

    let page = run_query(&records, &query);
    print_record_page(&page, args.page.max(1));
    Ok(())
}

fn template_id_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("form")
        .to_string()
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {what} from {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T, what: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("failed to serialize {what}"))?;
    fs::write(path, json)
        .with_context(|| format!("failed to write {what} to {}", path.display()))?;
    Ok(())
}
