//! Go registry backend.
//!
//! Renders a [`Catalog`] as one Go source file: a `map[string]*Language`
//! literal inside a `var (...)` block, keys in catalog order, field names
//! of each record padded to a common column. The same catalog always
//! renders to the same bytes.

use std::collections::HashSet;
use std::fmt::Write;

use crate::catalog::{AttrValue, Catalog, CatalogEntry};
use crate::schema::{FIELD_SCHEMA, FieldKind, Presence};

/// Options for the Go registry backend.
#[derive(Debug, Clone)]
pub struct GoOptions {
    /// Go package name for the generated file.
    pub package: String,
    /// Name of the generated map variable.
    pub var_name: String,
    /// Go type the map values point to.
    pub type_name: String,
    /// Also emit the struct declaration for the value type.
    pub type_decl: bool,
}

impl GoOptions {
    pub fn with_package(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Default::default()
        }
    }
}

impl Default for GoOptions {
    fn default() -> Self {
        Self {
            package: "linguist".into(),
            var_name: "Languages".into(),
            type_name: "Language".into(),
            type_decl: false,
        }
    }
}

/// A value that cannot be rendered under its field's declared kind.
#[derive(Debug, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct KindMismatch {
    pub expected: &'static str,
    pub found: String,
}

/// Compilation failures. Any of these aborts the whole run; no partial
/// registry is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("{language}: {field}: {source}")]
    InvalidField {
        language: String,
        field: &'static str,
        source: KindMismatch,
    },
    #[error("duplicate language name: {0}")]
    DuplicateKey(String),
    #[error("catalog contains no languages")]
    EmptyCatalog,
    #[error("{0}: entry has no descriptive attributes")]
    EmptyEntry(String),
}

/// One field of a compiled record: Go field name plus rendered literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub name: &'static str,
    pub literal: String,
}

/// A record ready for assembly: registry key plus schema-ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRecord {
    pub key: String,
    pub fields: Vec<RenderedField>,
}

/// The assembled registry: records in catalog order, keys unique.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub records: Vec<CompiledRecord>,
}

/// Quote a string as a Go interpreted string literal.
pub fn go_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render one value as a Go literal under the declared field kind.
pub fn render_value(value: &AttrValue, kind: FieldKind) -> Result<String, KindMismatch> {
    let mismatch = |found: String| KindMismatch {
        expected: kind.expected_name(),
        found,
    };
    match (kind, value) {
        (FieldKind::Str, AttrValue::Str(s)) => Ok(go_string(s)),
        (FieldKind::StrList, AttrValue::List(items)) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    AttrValue::Str(s) => parts.push(go_string(s)),
                    other => {
                        return Err(mismatch(format!("list containing {}", other.kind_name())));
                    }
                }
            }
            Ok(format!("[]string{{{}}}", parts.join(", ")))
        }
        (FieldKind::Bool { .. }, AttrValue::Bool(b)) => Ok(b.to_string()),
        (FieldKind::Int, AttrValue::Int(n)) => Ok(n.to_string()),
        (_, other) => Err(mismatch(other.kind_name().to_string())),
    }
}

/// Compile one catalog entry into a record.
///
/// Fields follow [`FIELD_SCHEMA`] order; an entry that yields no
/// conditional field at all is rejected rather than emitted as a
/// name-and-defaults husk.
pub fn compile_record(entry: &CatalogEntry) -> Result<CompiledRecord, CompileError> {
    let mut fields = Vec::with_capacity(FIELD_SCHEMA.len());
    let mut descriptive = 0usize;
    for spec in FIELD_SCHEMA {
        let Some(value) = spec.resolve(entry) else {
            continue;
        };
        let literal =
            render_value(&value, spec.kind).map_err(|source| CompileError::InvalidField {
                language: entry.name.clone(),
                field: spec.name,
                source,
            })?;
        if spec.presence == Presence::IfPresent {
            descriptive += 1;
        }
        fields.push(RenderedField {
            name: spec.name,
            literal,
        });
    }
    if descriptive == 0 {
        return Err(CompileError::EmptyEntry(entry.name.clone()));
    }
    Ok(CompiledRecord {
        key: entry.name.clone(),
        fields,
    })
}

impl CompiledRecord {
    /// Literals start one column past the record's longest field name.
    fn name_width(&self) -> usize {
        self.fields.iter().map(|f| f.name.len()).max().unwrap_or(0)
    }

    fn write_block(&self, out: &mut String, type_name: &str) {
        let width = self.name_width();
        out.push_str("\t\t");
        out.push_str(&go_string(&self.key));
        out.push_str(": &");
        out.push_str(type_name);
        out.push_str("{\n");
        for field in &self.fields {
            out.push_str("\t\t\t");
            out.push_str(field.name);
            out.push(':');
            for _ in field.name.len()..width {
                out.push(' ');
            }
            out.push(' ');
            out.push_str(&field.literal);
            out.push_str(",\n");
        }
        out.push_str("\t\t},\n");
    }
}

/// Compile a whole catalog, preserving entry order.
pub fn compile_catalog(catalog: &Catalog) -> Result<Registry, CompileError> {
    if catalog.entries.is_empty() {
        return Err(CompileError::EmptyCatalog);
    }
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(catalog.entries.len());
    for entry in &catalog.entries {
        if !seen.insert(entry.name.as_str()) {
            return Err(CompileError::DuplicateKey(entry.name.clone()));
        }
        records.push(compile_record(entry)?);
    }
    Ok(Registry { records })
}

impl Registry {
    /// Render the registry as Go source.
    pub fn render(&self, options: &GoOptions) -> String {
        let mut out = String::new();
        out.push_str("package ");
        out.push_str(&options.package);
        out.push_str("\n\n");
        if options.type_decl {
            write_type_decl(&mut out, &options.type_name);
            out.push('\n');
        }
        out.push_str("var (\n\t");
        out.push_str(&options.var_name);
        out.push_str(" = map[string]*");
        out.push_str(&options.type_name);
        out.push_str("{\n");
        for record in &self.records {
            record.write_block(&mut out, &options.type_name);
        }
        out.push_str("\t}\n)\n");
        out
    }
}

/// Compile and render in one step.
pub fn generate_registry(catalog: &Catalog, options: &GoOptions) -> Result<String, CompileError> {
    Ok(compile_catalog(catalog)?.render(options))
}

fn go_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Str => "string",
        FieldKind::StrList => "[]string",
        FieldKind::Bool { .. } => "bool",
        FieldKind::Int => "int",
    }
}

/// Struct declaration matching the schema, gofmt-aligned.
fn write_type_decl(out: &mut String, type_name: &str) {
    let width = FIELD_SCHEMA.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let _ = writeln!(out, "// {} is one entry of the generated registry.", type_name);
    let _ = writeln!(out, "type {} struct {{", type_name);
    for spec in FIELD_SCHEMA {
        out.push('\t');
        out.push_str(spec.name);
        for _ in spec.name.len()..width {
            out.push(' ');
        }
        out.push(' ');
        out.push_str(go_type(spec.kind));
        out.push('\n');
    }
    out.push_str("}\n");
}
