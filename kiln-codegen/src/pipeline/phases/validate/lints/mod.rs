//! Built-in lints for document validation.

mod empty_model;
mod relation_kind;
mod self_relation;

pub use empty_model::EmptyModelLint;
pub use relation_kind::RelationKindLint;
pub use self_relation::SelfRelationLint;
