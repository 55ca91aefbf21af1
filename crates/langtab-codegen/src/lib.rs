//! Static Go language registry generation from a language catalog.
//!
//! `langtab-codegen` compiles a catalog of language metadata records (the
//! Linguist `languages.yml` format) into one deterministic Go source file
//! holding a `map[string]*Language{...}` literal, so the consumer links the
//! whole registry in at compile time instead of parsing YAML at runtime.
//!
//! # Architecture
//!
//! ```text
//! Input              IR                    Output
//! ─────────────    ─────────────────    ──────────────────
//! languages.yml ─> Catalog ──────────> Go registry source
//! (input/yaml)     (catalog.rs, one    (output/go.rs)
//!                  entry per language)
//! ```
//!
//! Field selection, defaulting and emission order are driven by the fixed
//! table in [`schema`]; the Go backend renders each record with its field
//! names padded to a common column and assembles the records in catalog
//! order, rejecting duplicate names.
//!
//! # Example
//!
//! ```
//! use langtab_codegen::{GoOptions, generate_registry, parse_catalog};
//!
//! let catalog = parse_catalog("Go:\n  type: programming\n  language_id: 378\n").unwrap();
//! let output = generate_registry(&catalog, &GoOptions::default()).unwrap();
//!
//! assert!(output.starts_with("package linguist\n"));
//! assert!(output.contains("\"Go\": &Language{"));
//! ```

pub mod catalog;
pub mod input;
pub mod output;
pub mod schema;

// Re-export commonly used items
pub use catalog::{AttrValue, Catalog, CatalogEntry};
pub use input::{ParseError, parse_catalog};
pub use output::go::{CompileError, GoOptions, Registry, generate_registry};
