//! Intermediate representation for the language catalog.
//!
//! Input parsers normalize the outer document format into a [`Catalog`]
//! before it is handed to an output backend. Attribute values keep their
//! source shape ([`AttrValue`]); kind checking happens at render time so
//! that a mismatch can name the offending language and field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An attribute value as found in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Explicit null.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<AttrValue>),
    /// A nested mapping. Never renderable; kept so the error can say so.
    Map(BTreeMap<String, AttrValue>),
}

/// One language entry: its name (the catalog key) and its attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Language name, also the registry key.
    pub name: String,
    /// Attribute key to value, e.g. `"type"` to `Str("programming")`.
    pub attributes: BTreeMap<String, AttrValue>,
}

/// A whole catalog, entries in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl AttrValue {
    /// Build a string value.
    pub fn str(s: impl Into<String>) -> Self {
        AttrValue::Str(s.into())
    }

    /// Build a list of string values.
    pub fn strings(items: &[&str]) -> Self {
        AttrValue::List(items.iter().map(|s| AttrValue::str(*s)).collect())
    }

    /// Presence for conditional emission: null, `""` and `[]` count as
    /// absent. `Bool(false)` is present.
    pub fn is_present(&self) -> bool {
        match self {
            AttrValue::Null => false,
            AttrValue::Str(s) => !s.is_empty(),
            AttrValue::List(items) => !items.is_empty(),
            _ => true,
        }
    }

    /// Human name of the value's kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AttrValue::Null => "null",
            AttrValue::Bool(_) => "boolean",
            AttrValue::Int(_) => "integer",
            AttrValue::Float(_) => "float",
            AttrValue::Str(_) => "string",
            AttrValue::List(_) => "list",
            AttrValue::Map(_) => "mapping",
        }
    }
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add one attribute, builder style.
    pub fn attr(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_catalog_programmatically() {
        let mut catalog = Catalog::new();

        catalog.add(
            CatalogEntry::new("Go")
                .attr("type", AttrValue::str("programming"))
                .attr("extensions", AttrValue::strings(&[".go"])),
        );
        catalog.add(CatalogEntry::new("Ruby").attr("type", AttrValue::str("programming")));

        assert_eq!(catalog.entries.len(), 2);
        assert_eq!(catalog.entries[0].name, "Go");
        assert_eq!(
            catalog.entries[0].attributes.get("extensions"),
            Some(&AttrValue::strings(&[".go"]))
        );
    }

    #[test]
    fn presence_treats_empty_as_absent() {
        assert!(!AttrValue::Null.is_present());
        assert!(!AttrValue::str("").is_present());
        assert!(!AttrValue::List(vec![]).is_present());

        // Explicit false is a real value, not an absence.
        assert!(AttrValue::Bool(false).is_present());
        assert!(AttrValue::Int(0).is_present());
        assert!(AttrValue::str("0").is_present());
        assert!(AttrValue::strings(&[""]).is_present());
    }

    #[test]
    fn kind_names() {
        assert_eq!(AttrValue::Null.kind_name(), "null");
        assert_eq!(AttrValue::Bool(true).kind_name(), "boolean");
        assert_eq!(AttrValue::Int(378).kind_name(), "integer");
        assert_eq!(AttrValue::str("x").kind_name(), "string");
        assert_eq!(AttrValue::strings(&[]).kind_name(), "list");
        assert_eq!(AttrValue::Map(BTreeMap::new()).kind_name(), "mapping");
    }
}
