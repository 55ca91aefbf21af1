//! Output backends.
//!
//! Each backend renders a [`Catalog`](crate::catalog::Catalog) as source
//! text for a target language.

pub mod go;

pub use go::{CompileError, GoOptions, Registry, generate_registry};
