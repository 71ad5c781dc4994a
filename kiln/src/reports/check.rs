//! Check command report.

use std::path::PathBuf;

use kiln_codegen::pipeline::{Diagnostic, Severity};

use super::output::{Line, Output, Report};

/// One line of the model listing.
#[derive(Debug)]
pub struct ModelSummary {
    pub name: String,
    pub fields: usize,
    pub relations: usize,
}

/// Report data from document validation.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    pub models: Vec<ModelSummary>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            let msg = match &diag.location {
                Some(loc) => format!("{}: {}\n  --> {}", diag.severity, diag.message, loc),
                None => format!("{}: {}", diag.severity, diag.message),
            };
            out.line(match diag.severity {
                Severity::Error => Line::Error(&msg),
                Severity::Warning => Line::Warning(&msg),
                Severity::Info => Line::Text(&msg),
            });
        }
        if !self.diagnostics.is_empty() {
            out.line(Line::Blank);
        }

        if !self.is_valid() {
            return;
        }

        out.line(Line::Text(&format!(
            "✓ {} is valid",
            self.config_path.display()
        )));
        out.line(Line::Blank);
        out.line(Line::Heading(&format!(
            "{} model{}",
            self.models.len(),
            if self.models.len() == 1 { "" } else { "s" }
        )));
        for model in &self.models {
            out.line(Line::Bullet(&format!(
                "{} ({} fields, {} relations)",
                model.name, model.fields, model.relations
            )));
        }
    }
}
