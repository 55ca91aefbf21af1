//! The fixed field schema for registry records.
//!
//! Every record emits its fields in the order of [`FIELD_SCHEMA`]; nothing
//! about emission order or defaulting depends on the catalog itself. The
//! two trailing booleans are mandatory-with-default: they appear in every
//! record even when the catalog never mentions them.

use crate::catalog::{AttrValue, CatalogEntry};

/// Where a field's value is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The catalog entry's own key.
    Key,
    /// A named attribute of the entry.
    Attr(&'static str),
}

/// The value kind a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    StrList,
    Bool { default: bool },
    Int,
}

/// When a field appears in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Only when the source attribute is present and non-empty.
    IfPresent,
    /// In every record; an absent attribute falls back to the kind's default.
    Always,
}

/// One row of the field schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Go struct field name.
    pub name: &'static str,
    pub source: Source,
    pub kind: FieldKind,
    pub presence: Presence,
}

const fn attr(
    name: &'static str,
    key: &'static str,
    kind: FieldKind,
    presence: Presence,
) -> FieldSpec {
    FieldSpec {
        name,
        source: Source::Attr(key),
        kind,
        presence,
    }
}

/// Registry fields in emission order.
pub const FIELD_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "Name",
        source: Source::Key,
        kind: FieldKind::Str,
        presence: Presence::Always,
    },
    attr("Type", "type", FieldKind::Str, Presence::IfPresent),
    attr("Group", "group", FieldKind::Str, Presence::IfPresent),
    attr("Color", "color", FieldKind::Str, Presence::IfPresent),
    attr("Aliases", "aliases", FieldKind::StrList, Presence::IfPresent),
    attr("Extensions", "extensions", FieldKind::StrList, Presence::IfPresent),
    attr("Filenames", "filenames", FieldKind::StrList, Presence::IfPresent),
    attr("Interpreters", "interpreters", FieldKind::StrList, Presence::IfPresent),
    attr("TmScope", "tm_scope", FieldKind::Str, Presence::IfPresent),
    attr("AceMode", "ace_mode", FieldKind::Str, Presence::IfPresent),
    attr("LanguageID", "language_id", FieldKind::Int, Presence::IfPresent),
    attr("Wrap", "wrap", FieldKind::Bool { default: false }, Presence::Always),
    attr("Searchable", "searchable", FieldKind::Bool { default: true }, Presence::Always),
];

impl FieldKind {
    /// What the renderer accepts for this kind, for error messages.
    pub fn expected_name(self) -> &'static str {
        match self {
            FieldKind::Str => "string",
            FieldKind::StrList => "list of strings",
            FieldKind::Bool { .. } => "boolean",
            FieldKind::Int => "integer",
        }
    }
}

impl FieldSpec {
    /// Presence and defaulting for one field of one entry.
    ///
    /// `None` means the field is omitted from the record entirely; no null
    /// placeholder is ever emitted. Only a missing, null or empty attribute
    /// triggers a default, so an explicit `wrap: false` or
    /// `searchable: true` renders from the catalog value.
    pub fn resolve(&self, entry: &CatalogEntry) -> Option<AttrValue> {
        let value = match self.source {
            Source::Key => return Some(AttrValue::Str(entry.name.clone())),
            Source::Attr(key) => entry.attributes.get(key).filter(|v| v.is_present()),
        };
        match (value, self.kind) {
            (Some(v), _) => Some(v.clone()),
            (None, FieldKind::Bool { default }) if self.presence == Presence::Always => {
                Some(AttrValue::Bool(default))
            }
            (None, _) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> &'static FieldSpec {
        FIELD_SCHEMA
            .iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("no field named {}", name))
    }

    #[test]
    fn schema_order_is_fixed() {
        let names: Vec<&str> = FIELD_SCHEMA.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "Name",
                "Type",
                "Group",
                "Color",
                "Aliases",
                "Extensions",
                "Filenames",
                "Interpreters",
                "TmScope",
                "AceMode",
                "LanguageID",
                "Wrap",
                "Searchable",
            ]
        );
    }

    #[test]
    fn only_the_booleans_are_always_emitted_from_attributes() {
        for s in FIELD_SCHEMA {
            match (s.source, s.presence) {
                (Source::Key, Presence::Always) => assert_eq!(s.name, "Name"),
                (Source::Attr(_), Presence::Always) => {
                    assert!(matches!(s.kind, FieldKind::Bool { .. }), "{}", s.name);
                }
                (Source::Attr(_), Presence::IfPresent) => {}
                (Source::Key, Presence::IfPresent) => panic!("key-sourced field must be Always"),
            }
        }
    }

    #[test]
    fn name_comes_from_the_entry_key() {
        let entry = CatalogEntry::new("Gettext Catalog");
        assert_eq!(
            spec("Name").resolve(&entry),
            Some(AttrValue::str("Gettext Catalog"))
        );
    }

    #[test]
    fn booleans_default_when_absent_or_null() {
        let absent = CatalogEntry::new("X");
        assert_eq!(spec("Wrap").resolve(&absent), Some(AttrValue::Bool(false)));
        assert_eq!(
            spec("Searchable").resolve(&absent),
            Some(AttrValue::Bool(true))
        );

        let null = CatalogEntry::new("X")
            .attr("wrap", AttrValue::Null)
            .attr("searchable", AttrValue::Null);
        assert_eq!(spec("Wrap").resolve(&null), Some(AttrValue::Bool(false)));
        assert_eq!(spec("Searchable").resolve(&null), Some(AttrValue::Bool(true)));
    }

    #[test]
    fn explicit_booleans_override_defaults() {
        let entry = CatalogEntry::new("X")
            .attr("wrap", AttrValue::Bool(true))
            .attr("searchable", AttrValue::Bool(false));
        assert_eq!(spec("Wrap").resolve(&entry), Some(AttrValue::Bool(true)));
        assert_eq!(
            spec("Searchable").resolve(&entry),
            Some(AttrValue::Bool(false))
        );
    }

    #[test]
    fn conditional_fields_are_omitted_when_absent_or_empty() {
        let entry = CatalogEntry::new("X")
            .attr("color", AttrValue::str(""))
            .attr("extensions", AttrValue::List(vec![]))
            .attr("tm_scope", AttrValue::Null);
        assert_eq!(spec("Type").resolve(&entry), None);
        assert_eq!(spec("Color").resolve(&entry), None);
        assert_eq!(spec("Extensions").resolve(&entry), None);
        assert_eq!(spec("TmScope").resolve(&entry), None);
        assert_eq!(spec("LanguageID").resolve(&entry), None);
    }

    #[test]
    fn present_values_resolve_as_is() {
        let entry = CatalogEntry::new("Go")
            .attr("type", AttrValue::str("programming"))
            .attr("language_id", AttrValue::Int(378));
        assert_eq!(
            spec("Type").resolve(&entry),
            Some(AttrValue::str("programming"))
        );
        assert_eq!(spec("LanguageID").resolve(&entry), Some(AttrValue::Int(378)));
    }

    #[test]
    fn wrong_kinds_still_resolve() {
        // Kind checking is the renderer's job; resolve only decides presence.
        let entry = CatalogEntry::new("X").attr("type", AttrValue::Int(1));
        assert_eq!(spec("Type").resolve(&entry), Some(AttrValue::Int(1)));
    }
}
