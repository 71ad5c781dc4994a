//! Internal representation of converted models.
//!
//! Entities and fields are built once by [`crate::convert`] and are
//! read-only afterwards.

mod tag;

use indexmap::IndexSet;
pub use kiln_schema::FieldKind;
pub use tag::{Tag, TagArg, TagValue};

/// A converted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) ty: String,
    pub(crate) kind: FieldKind,
    pub(crate) tags: Vec<Tag>,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved target-language type, list marker included.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// A converted model: one generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub(crate) name: String,
    pub(crate) fields: Vec<Field>,
    pub(crate) relations: IndexSet<String>,
    pub(crate) enums: IndexSet<String>,
    pub(crate) tags: Vec<Tag>,
}

impl Entity {
    /// Model name as declared in the schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exported class symbol.
    pub fn class_name(&self) -> String {
        kiln_core::to_pascal_case(&self.name)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Other entities this one imports, in first-reference order.
    ///
    /// Never contains the entity itself.
    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.relations.iter().map(String::as_str)
    }

    /// Enums referenced by fields, in first-reference order.
    pub fn enums(&self) -> impl Iterator<Item = &str> {
        self.enums.iter().map(String::as_str)
    }

    /// Entity-level tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Whether this entity holds a relation to `entity`.
    pub fn relates_to(&self, entity: &str) -> bool {
        self.relations.contains(entity)
    }
}
