//! Lint the document before anything is converted.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{EmptyModelLint, RelationKindLint, SelfRelationLint};

use crate::pipeline::{CompilationContext, Phase, Severity};

/// Runs every registered [`Lint`] and stops the pipeline on errors.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// The built-in lint set.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(EmptyModelLint),
                Box::new(SelfRelationLint),
                Box::new(RelationKindLint),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Lint models and relations"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut found = Vec::new();
        for lint in &self.lints {
            lint.check(&ctx.document, &mut found);
            tracing::trace!(lint = lint.name(), "lint finished");
        }

        for diag in found {
            match diag.severity {
                Severity::Error => tracing::error!("{diag}"),
                Severity::Warning => tracing::warn!("{diag}"),
                Severity::Info => tracing::debug!("{diag}"),
            }
            ctx.report(diag);
        }

        let errors = ctx.count(Severity::Error);
        if errors > 0 {
            bail!("document has {errors} error(s)");
        }
        Ok(())
    }
}
