//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints on the document
//! - [`ConvertPhase`] - turns raw models into entities
//! - [`PlacePhase`] - builds the batch and places every file
//! - [`RegisterPhase`] - registers imports (deferred entity origins)
//! - [`ResolvePhase`] - rewrites deferred origins into relative paths

mod convert;
mod place;
mod register;
mod resolve;
mod validate;

pub use convert::ConvertPhase;
pub use place::PlacePhase;
pub use register::RegisterPhase;
pub use resolve::ResolvePhase;
pub use validate::{EmptyModelLint, Lint, RelationKindLint, SelfRelationLint, ValidatePhase};
