pub mod bag;
pub mod error;
pub mod field;
pub mod mapping;
pub mod record;
pub mod report;

pub use bag::DataBag;
pub use error::{ModelError, Result};
pub use field::{FieldType, FormField};
pub use mapping::{FieldMapping, MappingSet, MatchKind};
pub use record::{DocumentRecord, DocumentStatus};
pub use report::MappingReport;
