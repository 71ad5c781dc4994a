//! Lint for models without fields.

use kiln_schema::Document;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about models that would generate an empty class.
pub struct EmptyModelLint;

impl Lint for EmptyModelLint {
    fn name(&self) -> &'static str {
        "empty-model"
    }

    fn check(&self, document: &Document, diagnostics: &mut Vec<Diagnostic>) {
        for model in document.models.iter().filter(|m| m.fields.is_empty()) {
            diagnostics.push(
                Diagnostic::warning("validate", format!("model '{}' has no fields", model.name))
                    .at(&model.name),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use kiln_schema::{RawField, RawModel};

    use super::*;

    #[test]
    fn test_empty_model() {
        let document = Document::new([
            RawModel::new("Tag", []),
            RawModel::new("User", [RawField::scalar("id", "Int")]),
        ]);

        let mut diagnostics = Vec::new();
        EmptyModelLint.check(&document, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Tag"));
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].location.as_deref(), Some("Tag"));
    }
}
