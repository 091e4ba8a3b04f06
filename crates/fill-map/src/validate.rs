//! Pre-submission validation of a mapping set.

use fill_model::{FieldMapping, FormField, MappingReport};

/// Checks a proposed mapping set against the form's required fields.
///
/// Every required field whose mapping has no matched data key (or which
/// has no mapping entry at all) produces one error naming the field.
/// Problems are reported as data, never as an `Err`; callers decide
/// whether to block submission.
///
/// A non-null `document_field` is taken at face value: whether the key
/// still exists in the current data bag is deliberately not re-checked
/// here. Staleness surfaces later, when values are resolved.
pub fn validate_mappings(form_fields: &[FormField], mappings: &[FieldMapping]) -> MappingReport {
    let mut errors = Vec::new();
    for field in form_fields {
        if !field.required {
            continue;
        }
        match mappings.iter().find(|m| m.form_field == field.name) {
            Some(mapping) if mapping.is_matched() => {}
            Some(_) => errors.push(format!(
                "required field '{}' has no matched data key",
                field.name
            )),
            None => errors.push(format!(
                "required field '{}' has no mapping entry",
                field.name
            )),
        }
    }
    MappingReport::from_errors(errors)
}
