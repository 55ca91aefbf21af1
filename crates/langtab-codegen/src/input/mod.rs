//! Catalog input parsers.
//!
//! Each parser reads an outer document format and produces a
//! [`Catalog`](crate::catalog::Catalog).

pub(crate) mod yaml;

pub use yaml::{ParseError, parse_catalog};
