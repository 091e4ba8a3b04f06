//! Repository for persisting and reusing mapping sets.
//!
//! File-system based storage so a template mapped once stays mapped the
//! same way on the next batch run. Each set is a JSON file named after
//! the sanitized template id.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use fill_model::MappingSet;

/// Repository for storing and retrieving mapping sets.
#[derive(Debug, Clone)]
pub struct MappingRepository {
    base_dir: PathBuf,
}

/// Metadata about a stored mapping set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingSetMetadata {
    pub template_id: String,
    pub file_path: PathBuf,
    pub mapped_count: usize,
    pub unmatched_count: usize,
}

/// A mapping set plus repository metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMappingSet {
    #[serde(flatten)]
    pub set: MappingSet,
    /// When this set was saved (RFC 3339).
    pub saved_at: Option<String>,
    /// Optional notes about this set.
    pub description: Option<String>,
    /// Version of the stored format.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl StoredMappingSet {
    pub fn new(set: MappingSet) -> Self {
        Self {
            set,
            saved_at: Some(chrono::Utc::now().to_rfc3339()),
            description: None,
            version: default_version(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl MappingRepository {
    /// Opens a repository at the given directory, creating it if needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).with_context(|| {
            format!(
                "failed to create mapping repository: {}",
                base_dir.display()
            )
        })?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Saves a mapping set, returning the path it was written to.
    pub fn save(&self, set: &MappingSet) -> Result<PathBuf> {
        self.save_stored(&StoredMappingSet::new(set.clone()))
    }

    /// Saves a stored set (with metadata).
    pub fn save_stored(&self, stored: &StoredMappingSet) -> Result<PathBuf> {
        let path = self.set_path(&stored.set.template_id);
        let json = serde_json::to_string_pretty(stored).with_context(|| {
            format!("failed to serialize mapping set {}", stored.set.template_id)
        })?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write mapping set to {}", path.display()))?;
        debug!(template = %stored.set.template_id, path = %path.display(), "mapping set saved");
        Ok(path)
    }

    /// Loads the mapping set for a template, `None` if absent.
    pub fn load(&self, template_id: &str) -> Result<Option<MappingSet>> {
        Ok(self.load_stored(template_id)?.map(|stored| stored.set))
    }

    /// Loads a stored set (with metadata), `None` if absent.
    pub fn load_stored(&self, template_id: &str) -> Result<Option<StoredMappingSet>> {
        let path = self.set_path(template_id);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read mapping set from {}", path.display()))?;
        let stored: StoredMappingSet = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse mapping set from {}", path.display()))?;
        Ok(Some(stored))
    }

    /// Lists all stored sets, sorted by template id.
    pub fn list(&self) -> Result<Vec<MappingSetMetadata>> {
        let mut metadata = Vec::new();
        for entry in fs::read_dir(&self.base_dir)
            .with_context(|| format!("failed to read repository: {}", self.base_dir.display()))?
        {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();
            if !filename.ends_with(".json") {
                continue;
            }
            let contents = fs::read_to_string(&path)?;
            if let Ok(stored) = serde_json::from_str::<StoredMappingSet>(&contents) {
                metadata.push(MappingSetMetadata {
                    template_id: stored.set.template_id.clone(),
                    file_path: path,
                    mapped_count: stored.set.matched_count(),
                    unmatched_count: stored.set.unmatched_fields.len(),
                });
            }
        }
        metadata.sort_by(|a, b| a.template_id.cmp(&b.template_id));
        Ok(metadata)
    }

    /// Deletes a stored set; returns whether anything was removed.
    pub fn delete(&self, template_id: &str) -> Result<bool> {
        let path = self.set_path(template_id);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("failed to delete mapping set: {}", path.display()))?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn exists(&self, template_id: &str) -> bool {
        self.set_path(template_id).exists()
    }

    fn set_path(&self, template_id: &str) -> PathBuf {
        self.base_dir
            .join(format!("{}.json", sanitize_id(template_id)))
    }
}

/// Normalizes a template id for use in filenames.
fn sanitize_id(id: &str) -> String {
    id.trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
