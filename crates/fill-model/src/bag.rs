//! The document data bag: a flat key/value store of known information
//! about a person or entity, sourced from profiles or aggregated documents.
//!
//! Insertion order is semantically meaningful: the mapping engine breaks
//! score ties in favor of the earlier key, so [`DataBag`] keeps entries in
//! the order they arrived and its serde implementation preserves JSON
//! object key order across round trips (a derived map type would not).

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered flat mapping from field key to string value. Read-only from the
/// mapping engine's perspective.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataBag {
    entries: Vec<(String, String)>,
}

impl DataBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        let mut bag = Self::new();
        for (key, value) in entries {
            bag.insert(key, value);
        }
        bag
    }

    /// Inserts a key/value pair. An existing key keeps its original
    /// position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for DataBag {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

impl Serialize for DataBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct DataBagVisitor;

impl<'de> Visitor<'de> for DataBagVisitor {
    type Value = DataBag;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of string keys to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut bag = DataBag::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            bag.insert(key, value);
        }
        Ok(bag)
    }
}

impl<'de> Deserialize<'de> for DataBag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DataBagVisitor)
    }
}
