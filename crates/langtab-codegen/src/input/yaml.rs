//! YAML catalog parser.
//!
//! Decodes the Linguist `languages.yml` shape: a top-level mapping of
//! language name to attribute mapping. Entry order is preserved; attribute
//! values convert 1:1 into [`AttrValue`] without any kind checking, which
//! belongs to the output backend.

use std::collections::BTreeMap;

use serde_yaml::Value;

use crate::catalog::{AttrValue, Catalog, CatalogEntry};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("expected a top-level mapping of language entries, found {0}")]
    NotAMapping(&'static str),
    #[error("language name must be a string, found {0}")]
    NonStringName(&'static str),
    #[error("{0}: entry must be a mapping of attributes, found {1}")]
    EntryNotAMapping(String, &'static str),
    #[error("{language}: attribute key must be a string, found {found}")]
    NonStringKey {
        language: String,
        found: &'static str,
    },
}

/// Parse YAML catalog text into a [`Catalog`].
pub fn parse_catalog(source: &str) -> Result<Catalog, ParseError> {
    let doc: Value = serde_yaml::from_str(source)?;
    let mapping = match &doc {
        Value::Mapping(m) => m,
        other => return Err(ParseError::NotAMapping(yaml_kind(other))),
    };

    let mut catalog = Catalog::new();
    for (key, value) in mapping {
        let name = key
            .as_str()
            .ok_or_else(|| ParseError::NonStringName(yaml_kind(key)))?;
        let attributes = parse_attributes(name, value)?;
        catalog.add(CatalogEntry {
            name: name.to_string(),
            attributes,
        });
    }
    Ok(catalog)
}

fn parse_attributes(name: &str, value: &Value) -> Result<BTreeMap<String, AttrValue>, ParseError> {
    let mapping = match value {
        Value::Mapping(m) => m,
        other => {
            return Err(ParseError::EntryNotAMapping(
                name.to_string(),
                yaml_kind(other),
            ));
        }
    };

    let mut attributes = BTreeMap::new();
    for (key, value) in mapping {
        let key = key.as_str().ok_or_else(|| ParseError::NonStringKey {
            language: name.to_string(),
            found: yaml_kind(key),
        })?;
        attributes.insert(key.to_string(), convert(value));
    }
    Ok(attributes)
}

/// YAML value to IR value, recursively.
fn convert(value: &Value) -> AttrValue {
    match value {
        Value::Null => AttrValue::Null,
        Value::Bool(b) => AttrValue::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => AttrValue::Int(i),
            None => AttrValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => AttrValue::Str(s.clone()),
        Value::Sequence(items) => AttrValue::List(items.iter().map(convert).collect()),
        Value::Mapping(m) => AttrValue::Map(
            m.iter()
                .filter_map(|(k, v)| Some((k.as_str()?.to_string(), convert(v))))
                .collect(),
        ),
        Value::Tagged(tagged) => convert(&tagged.value),
    }
}

fn yaml_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
