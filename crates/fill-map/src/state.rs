//! Mapping state for interactive mapping workflows.
//!
//! The UI edits a mapping set over time: accepting guesses, picking keys
//! by hand, clearing entries, regenerating after the data bag changes.
//! [`MappingState`] is that explicit, page-scoped container, passed by
//! reference to whoever needs it; there is no process-wide singleton.
//!
//! The one contract that matters: entries a human has touched
//! (`manual_override == true`) survive [`MappingState::regenerate`]
//! untouched. Only an explicit [`MappingState::reset_field`] hands a
//! field back to the engine.

use fill_model::{DataBag, FieldMapping, FormField, MappingReport, MappingSet};

use crate::engine::MappingEngine;
use crate::error::MapError;
use crate::validate::validate_mappings;

/// Editable mapping state for a single form.
#[derive(Debug, Clone)]
pub struct MappingState {
    form_fields: Vec<FormField>,
    mappings: Vec<FieldMapping>,
}

/// Summary counts over the current state.
#[derive(Debug, Clone, Copy)]
pub struct MappingSummary {
    pub total: usize,
    pub matched: usize,
    pub manual: usize,
    pub required: usize,
    pub required_matched: usize,
}

impl MappingState {
    /// Creates state by running the engine over the form schema.
    pub fn generate(engine: &MappingEngine, form_fields: Vec<FormField>, bag: &DataBag) -> Self {
        let mappings = engine.generate(&form_fields, bag);
        Self {
            form_fields,
            mappings,
        }
    }

    /// Restores state from a previously persisted mapping set.
    ///
    /// Fields missing from the set get an unmatched entry, preserving the
    /// one-mapping-per-field invariant; set entries for fields no longer
    /// in the schema are dropped.
    pub fn from_set(form_fields: Vec<FormField>, set: &MappingSet) -> Self {
        let mappings = form_fields
            .iter()
            .map(|field| {
                set.mapping_for(&field.name)
                    .cloned()
                    .unwrap_or_else(|| FieldMapping::unmatched(field.name.clone()))
            })
            .collect();
        Self {
            form_fields,
            mappings,
        }
    }

    pub fn form_fields(&self) -> &[FormField] {
        &self.form_fields
    }

    pub fn mappings(&self) -> &[FieldMapping] {
        &self.mappings
    }

    pub fn mapping_for(&self, form_field: &str) -> Option<&FieldMapping> {
        self.mappings.iter().find(|m| m.form_field == form_field)
    }

    /// Assigns a data key by hand. The key is not checked against any bag:
    /// the UI must tolerate references that later go stale.
    pub fn set_manual(&mut self, form_field: &str, key: &str) -> Result<(), MapError> {
        let mapping = self.mapping_mut(form_field)?;
        *mapping = FieldMapping::manual(form_field, key);
        Ok(())
    }

    /// Clears the entry. A cleared field is a human decision and survives
    /// regeneration like any other override.
    pub fn clear(&mut self, form_field: &str) -> Result<(), MapError> {
        let mapping = self.mapping_mut(form_field)?;
        *mapping = FieldMapping {
            manual_override: true,
            ..FieldMapping::unmatched(form_field)
        };
        Ok(())
    }

    /// Re-runs auto-mapping, overwriting only entries the user has not
    /// touched.
    pub fn regenerate(&mut self, engine: &MappingEngine, bag: &DataBag) {
        let fresh = engine.generate(&self.form_fields, bag);
        for (current, generated) in self.mappings.iter_mut().zip(fresh) {
            if !current.manual_override {
                *current = generated;
            }
        }
    }

    /// Resets one field back to the fresh automatic guess, clearing its
    /// override flag.
    pub fn reset_field(
        &mut self,
        form_field: &str,
        engine: &MappingEngine,
        bag: &DataBag,
    ) -> Result<(), MapError> {
        let field = self
            .form_fields
            .iter()
            .find(|f| f.name == form_field)
            .cloned()
            .ok_or_else(|| MapError::FieldNotFound(form_field.to_string()))?;
        let fresh = engine
            .generate(std::slice::from_ref(&field), bag)
            .into_iter()
            .next()
            .unwrap_or_else(|| FieldMapping::unmatched(form_field));
        let mapping = self.mapping_mut(form_field)?;
        *mapping = fresh;
        Ok(())
    }

    /// Runs the validator over the current state.
    pub fn report(&self) -> MappingReport {
        validate_mappings(&self.form_fields, &self.mappings)
    }

    pub fn summary(&self) -> MappingSummary {
        let required = self.form_fields.iter().filter(|f| f.required).count();
        let required_matched = self
            .form_fields
            .iter()
            .filter(|f| f.required)
            .filter(|f| {
                self.mapping_for(&f.name)
                    .is_some_and(FieldMapping::is_matched)
            })
            .count();
        MappingSummary {
            total: self.form_fields.len(),
            matched: self.mappings.iter().filter(|m| m.is_matched()).count(),
            manual: self.mappings.iter().filter(|m| m.manual_override).count(),
            required,
            required_matched,
        }
    }

    /// Snapshots the current state into a persistable set.
    pub fn to_set(&self, template_id: &str) -> MappingSet {
        MappingSet::new(template_id, self.mappings.clone())
    }

    fn mapping_mut(&mut self, form_field: &str) -> Result<&mut FieldMapping, MapError> {
        self.mappings
            .iter_mut()
            .find(|m| m.form_field == form_field)
            .ok_or_else(|| MapError::FieldNotFound(form_field.to_string()))
    }
}
