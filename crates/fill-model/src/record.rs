//! Ephemeral client-side copies of server-owned records.
//!
//! The backend is the source of truth for lifecycle (create, update,
//! archive, delete); these types exist only so fetched lists can be
//! filtered, sorted and paginated for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Processing lifecycle state of a document, in lifecycle order.
///
/// The derived `Ord` follows the declaration order, so sorting by status
/// groups records by how far along the pipeline they are.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Processing,
    Done,
    Failed,
    Archived,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Done => "done",
            DocumentStatus::Failed => "failed",
            DocumentStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(DocumentStatus::Pending),
            "processing" => Ok(DocumentStatus::Processing),
            "done" => Ok(DocumentStatus::Done),
            "failed" => Ok(DocumentStatus::Failed),
            "archived" => Ok(DocumentStatus::Archived),
            other => Err(ModelError::UnknownStatus(other.to_string())),
        }
    }
}

/// A document as reported by the backend list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub name: String,
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}
