//! Auto-mapping engine: proposes one data-bag key per form field.

use tracing::debug;

use fill_model::{DataBag, FieldMapping, FormField, MappingSet, MatchKind};

use crate::score::score_pair;
use crate::utils::normalize_compact;

/// Tunable knobs for the mapping engine.
///
/// The acceptance threshold is an explicit parameter rather than a buried
/// constant: deployments tune it against their own form corpus.
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// Minimum score (0.0-1.0) a fuzzy candidate needs to be accepted.
    pub min_confidence: f32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            min_confidence: 0.6,
        }
    }
}

/// Confidence level categories for mapping quality assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceLevel {
    /// Weak match requiring manual confirmation.
    Low,
    /// Reasonable match that should be reviewed.
    Medium,
    /// Near-certain match.
    High,
}

/// Boundaries between confidence levels.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceThresholds {
    pub high: f32,
    pub medium: f32,
    pub low: f32,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 0.95,
            medium: 0.80,
            low: 0.60,
        }
    }
}

impl ConfidenceThresholds {
    /// Categorizes a confidence score; `None` below the low threshold.
    #[must_use]
    pub fn categorize(&self, confidence: f32) -> Option<ConfidenceLevel> {
        if confidence >= self.high {
            Some(ConfidenceLevel::High)
        } else if confidence >= self.medium {
            Some(ConfidenceLevel::Medium)
        } else if confidence >= self.low {
            Some(ConfidenceLevel::Low)
        } else {
            None
        }
    }
}

/// Engine for mapping known data-bag keys onto the fields of a target form.
///
/// The engine is a pure function of its inputs: it holds no caller state,
/// never mutates the bag, and returns a fresh vector on every call, which
/// is what lets "reset to auto-detected" be implemented as "generate again
/// and overwrite one entry".
///
/// # Matching policy
///
/// 1. The first bag key (insertion order) whose compacted name equals the
///    compacted field name wins outright at confidence 1.0.
/// 2. Otherwise the bag key with the highest combined similarity score is
///    taken, if it clears [`EngineOptions::min_confidence`]. Ties go to
///    the earlier key in the bag's insertion order; deterministic, though
///    not guaranteed to be the semantically better pick.
/// 3. No candidate above the threshold leaves the field unmatched.
#[derive(Debug, Clone, Default)]
pub struct MappingEngine {
    options: EngineOptions,
}

impl MappingEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Engine with a custom acceptance threshold.
    pub fn with_threshold(min_confidence: f32) -> Self {
        Self {
            options: EngineOptions { min_confidence },
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Proposes a mapping for every form field, in schema order.
    ///
    /// Total over its inputs: empty `form_fields` yields an empty vector,
    /// an empty bag yields all-unmatched entries. All returned entries
    /// have `manual_override == false`.
    pub fn generate(&self, form_fields: &[FormField], bag: &DataBag) -> Vec<FieldMapping> {
        form_fields
            .iter()
            .map(|field| self.map_field(field, bag))
            .collect()
    }

    /// Runs [`Self::generate`] and wraps the result into a [`MappingSet`].
    pub fn generate_set(
        &self,
        template_id: &str,
        form_fields: &[FormField],
        bag: &DataBag,
    ) -> MappingSet {
        let set = MappingSet::new(template_id, self.generate(form_fields, bag));
        debug!(
            template = template_id,
            fields = form_fields.len(),
            matched = set.matched_count(),
            "auto-mapping complete"
        );
        set
    }

    fn map_field(&self, field: &FormField, bag: &DataBag) -> FieldMapping {
        let field_compact = normalize_compact(&field.name);
        if !field_compact.is_empty() {
            for key in bag.keys() {
                if normalize_compact(key) == field_compact {
                    debug!(field = %field.name, key = %key, "exact name match");
                    return FieldMapping {
                        form_field: field.name.clone(),
                        document_field: Some(key.to_string()),
                        confidence: 1.0,
                        match_kind: Some(MatchKind::Exact),
                        manual_override: false,
                    };
                }
            }
        }

        let mut best: Option<(&str, f64, MatchKind)> = None;
        for key in bag.keys() {
            let scored = score_pair(&field.name, key);
            // Strictly-greater keeps the earlier key on ties.
            if best.is_none_or(|(_, value, _)| scored.value > value) {
                best = Some((key, scored.value, scored.kind));
            }
        }

        match best {
            Some((key, value, kind)) if value >= f64::from(self.options.min_confidence) => {
                debug!(field = %field.name, key = %key, score = value, "fuzzy match");
                FieldMapping {
                    form_field: field.name.clone(),
                    document_field: Some(key.to_string()),
                    confidence: value as f32,
                    match_kind: Some(kind),
                    manual_override: false,
                }
            }
            _ => {
                debug!(field = %field.name, "no candidate above threshold");
                FieldMapping::unmatched(field.name.clone())
            }
        }
    }
}
