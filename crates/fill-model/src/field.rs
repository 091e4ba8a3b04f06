use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The kind of input slot a form exposes.
///
/// Form schemas are derived by inspecting an uploaded document or template;
/// when the extractor cannot tell what a field holds, it reports `Unknown`
/// and the type may later be inferred from the field name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Checkbox,
    Date,
    Email,
    Phone,
    Number,
    Currency,
    Unknown,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Checkbox => "checkbox",
            FieldType::Date => "date",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Number => "number",
            FieldType::Currency => "currency",
            FieldType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(FieldType::Text),
            "checkbox" => Ok(FieldType::Checkbox),
            "date" => Ok(FieldType::Date),
            "email" => Ok(FieldType::Email),
            "phone" => Ok(FieldType::Phone),
            "number" => Ok(FieldType::Number),
            "currency" => Ok(FieldType::Currency),
            "unknown" => Ok(FieldType::Unknown),
            other => Err(ModelError::UnknownFieldType(other.to_string())),
        }
    }
}

/// A named, typed input slot on a target form.
///
/// Field names are unique within a form; the schema is immutable once
/// derived from the source document. Name collisions are undefined behavior
/// and are not guarded against here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
}

impl FormField {
    pub fn new(name: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            required,
        }
    }

    /// A plain optional text field, the most common schema entry.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Text, false)
    }

    /// Marks the field as required for submission.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
