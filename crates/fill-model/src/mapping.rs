//! Field mapping types for data-bag-to-form-field assignment.
//!
//! A mapping set is the unit the UI edits and the repository persists:
//! one [`FieldMapping`] per form field, plus the list of fields the
//! engine could not match.

use serde::{Deserialize, Serialize};

/// Which strategy produced an automatic match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Normalized field name and data key are identical.
    Exact,
    /// A synonym pattern rule linked the two names.
    Pattern,
    /// String similarity and token overlap cleared the threshold.
    Fuzzy,
}

/// The assignment (or non-assignment) of a data-bag key to a form field.
///
/// Exactly one mapping exists per form field. `document_field` stays `None`
/// until the engine finds a match or a user selects one. Once a human has
/// changed an entry, `manual_override` is set and regeneration must not
/// silently overwrite it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Name of the form field this entry belongs to.
    pub form_field: String,
    /// Matched data-bag key, if any. May go stale if the bag changes after
    /// manual edits; consumers must tolerate a key that no longer resolves.
    pub document_field: Option<String>,
    /// 1.0 for exact and manual matches, the heuristic score for fuzzy
    /// ones, 0.0 when unmatched.
    #[serde(default)]
    pub confidence: f32,
    /// Strategy behind an automatic match; `None` for unmatched or manual
    /// entries.
    #[serde(default)]
    pub match_kind: Option<MatchKind>,
    /// True once a human changed the automatic guess (or cleared it).
    #[serde(default)]
    pub manual_override: bool,
}

impl FieldMapping {
    /// An entry with no matched data key.
    pub fn unmatched(form_field: impl Into<String>) -> Self {
        Self {
            form_field: form_field.into(),
            document_field: None,
            confidence: 0.0,
            match_kind: None,
            manual_override: false,
        }
    }

    /// A human-selected assignment.
    pub fn manual(form_field: impl Into<String>, document_field: impl Into<String>) -> Self {
        Self {
            form_field: form_field.into(),
            document_field: Some(document_field.into()),
            confidence: 1.0,
            match_kind: None,
            manual_override: true,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.document_field.is_some()
    }
}

/// Complete mapping set for one form template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingSet {
    /// Identifier of the form template the set was generated for.
    pub template_id: String,
    /// One entry per form field, in schema order.
    pub mappings: Vec<FieldMapping>,
    /// Form fields with no matched data key.
    pub unmatched_fields: Vec<String>,
}

impl MappingSet {
    /// Builds a set from mappings, deriving `unmatched_fields`.
    pub fn new(template_id: impl Into<String>, mappings: Vec<FieldMapping>) -> Self {
        let unmatched_fields = mappings
            .iter()
            .filter(|m| !m.is_matched())
            .map(|m| m.form_field.clone())
            .collect();
        Self {
            template_id: template_id.into(),
            mappings,
            unmatched_fields,
        }
    }

    pub fn mapping_for(&self, form_field: &str) -> Option<&FieldMapping> {
        self.mappings.iter().find(|m| m.form_field == form_field)
    }

    pub fn matched_count(&self) -> usize {
        self.mappings.iter().filter(|m| m.is_matched()).count()
    }
}
