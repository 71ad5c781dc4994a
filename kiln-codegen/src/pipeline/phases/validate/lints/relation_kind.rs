//! Lint for fields whose kind disagrees with their relation flag.

use kiln_schema::{Document, FieldKind};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns when `kind` and `relationName` tell different stories.
///
/// The relation flag wins during conversion: an `object` field without a
/// relation name is emitted verbatim and never imported.
pub struct RelationKindLint;

impl Lint for RelationKindLint {
    fn name(&self) -> &'static str {
        "relation-kind"
    }

    fn check(&self, document: &Document, diagnostics: &mut Vec<Diagnostic>) {
        for model in &document.models {
            for field in &model.fields {
                let location = format!("{}.{}", model.name, field.name);
                let message = match (field.kind, field.is_relation()) {
                    (FieldKind::Object, false) => format!(
                        "'{}' is an object field without a relation name; its type is not imported",
                        location
                    ),
                    (FieldKind::Scalar | FieldKind::Enum, true) => format!(
                        "'{}' has a relation name but is not an object field; treating it as a relation",
                        location
                    ),
                    _ => continue,
                };
                diagnostics.push(Diagnostic::warning("validate", message).at(location));
            }
        }
    }
}
