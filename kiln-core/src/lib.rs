//! Core utilities and types for the kiln class generator.
//!
//! This crate provides fundamental types and utilities used across
//! the kiln workspace.

mod file;
mod scalar;
mod utils;

// File operations
pub use file::{File, WriteMode, WriteResult};
// Fundamental types
pub use scalar::ScalarType;
// String utilities
pub use utils::{capitalize_first, to_kebab_case, to_pascal_case};
