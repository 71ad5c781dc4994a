//! Compilation pipeline from document to resolved batch.
//!
//! A [`Pipeline`] runs [`Phase`]s over a [`CompilationContext`]:
//!
//! - Explicit phase boundaries (validate → convert → place → register → resolve)
//! - Unified diagnostics collection
//! - Phase 2 of import resolution only after every file is placed
//!
//! # Example
//!
//! ```ignore
//! use kiln_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new(TypeScriptTypeMapper, "ts").run(document, config, root)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let generator = Generator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
