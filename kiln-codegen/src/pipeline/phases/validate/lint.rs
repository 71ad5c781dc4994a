//! Lint trait for document validation.

use kiln_schema::Document;

use crate::pipeline::Diagnostic;

/// A lint that checks the document for suspicious but legal shapes.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the document and add any diagnostics.
    fn check(&self, document: &Document, diagnostics: &mut Vec<Diagnostic>);
}
