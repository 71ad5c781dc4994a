//! Entity conversion and import resolution for the kiln class generator.
//!
//! This crate turns a parsed schema document into one output file per
//! entity, each carrying a closed, deduplicated and correctly-pathed import
//! list. Language-specific crates (e.g., `kiln-codegen-typescript`) supply
//! the type mapping and the final rendering.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`ir`] - Internal entities, fields and decorator tags
//! - [`convert`] - Raw model → internal entity conversion
//! - [`generation`] - Import records, path resolution, placement, output files
//! - [`language`] - Language-specific abstractions (TypeMapper, FileTemplate, ...)
//! - [`pipeline`] - Phase orchestration from document to resolved batch

pub mod builder;
pub mod convert;
pub mod generation;
pub mod ir;
pub mod language;
pub mod pipeline;

mod error;
#[cfg(test)]
mod testing;

pub use error::GenerateError;
