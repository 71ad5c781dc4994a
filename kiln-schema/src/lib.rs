//! Input document and configuration parsing for the kiln class generator.
//!
//! The schema document is the already-parsed data model (models, fields,
//! relations); `kiln.toml` holds the generator settings. Both are validated
//! on load and report errors as [`miette`] diagnostics pointing into the
//! offending source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod document;
mod error;
mod layout;
mod validate;

pub use config::{Config, DEFAULT_DECORATOR_MODULE, DEFAULT_ENUM_MODULE, GeneratorConfig};
pub use document::{Document, FieldKind, RawField, RawModel, parse_document};
pub use error::{Error, Result, SourceContext};
pub use layout::Layout;
