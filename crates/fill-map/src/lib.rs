//! Heuristic field auto-mapping for form filling.
//!
//! Given a target form's field names and a bag of known key/value data,
//! the engine proposes a best-effort assignment of data keys to form
//! fields using normalized string similarity, token overlap and synonym
//! pattern rules. The validator gates a mapping set on the form's
//! required fields before submission, and the repository persists sets
//! so a template mapped once stays consistent across runs.

pub mod engine;
pub mod error;
pub mod patterns;
pub mod repository;
pub mod score;
pub mod state;
pub mod typecheck;
pub mod utils;
pub mod validate;

pub use engine::{ConfidenceLevel, ConfidenceThresholds, EngineOptions, MappingEngine};
pub use error::MapError;
pub use repository::{MappingRepository, MappingSetMetadata, StoredMappingSet};
pub use state::{MappingState, MappingSummary};
pub use typecheck::{infer_field_type, value_matches_type};
pub use validate::validate_mappings;
