//! Lint for models that relate to themselves.

use kiln_schema::Document;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Notes self-relations, which reference the class without importing it.
pub struct SelfRelationLint;

impl Lint for SelfRelationLint {
    fn name(&self) -> &'static str {
        "self-relation"
    }

    fn check(&self, document: &Document, diagnostics: &mut Vec<Diagnostic>) {
        for model in &document.models {
            for field in &model.fields {
                if field.is_relation() && field.base_type() == Some(model.name.as_str()) {
                    diagnostics.push(
                        Diagnostic::info(
                            "validate",
                            format!(
                                "'{}.{}' relates to its own model; no import is generated",
                                model.name, field.name
                            ),
                        )
                        .at(format!("{}.{}", model.name, field.name)),
                    );
                }
            }
        }
    }
}
