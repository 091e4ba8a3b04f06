use serde::{Deserialize, Serialize};

/// Validation outcome for a mapping set.
///
/// Validation failure is data, not an error: callers decide whether to
/// block a user action on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingReport {
    /// True iff `errors` is empty.
    pub valid: bool,
    /// One human-readable message per problem, each naming the field.
    pub errors: Vec<String>,
}

impl MappingReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
