//! Pipeline orchestrator.

use std::path::PathBuf;

use eyre::{Result, WrapErr};
use kiln_schema::{Document, GeneratorConfig};

use super::{
    CompilationContext, Phase,
    phases::{ConvertPhase, PlacePhase, RegisterPhase, ResolvePhase, ValidatePhase},
};
use crate::language::TypeMapper;

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, convert, place, register, resolve)
/// followed by any user phases. A failing phase aborts the run; nothing has
/// been written at that point.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new(TypeScriptTypeMapper, "ts")
///     .phase(MyCustomPhase)
///     .run(document, config, root)?;
/// ```
pub struct Pipeline {
    builtin: Vec<Box<dyn Phase>>,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline for a language: its type mapper and file extension.
    pub fn new(mapper: impl TypeMapper + Send + Sync + 'static, extension: &'static str) -> Self {
        Self {
            builtin: vec![
                Box::new(ValidatePhase::new()),
                Box::new(ConvertPhase::new(mapper)),
                Box::new(PlacePhase::new(extension)),
                Box::new(RegisterPhase),
                Box::new(ResolvePhase),
            ],
            phases: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Names of every phase in execution order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        self.builtin
            .iter()
            .chain(&self.phases)
            .map(|p| p.name())
            .collect()
    }

    /// Run the pipeline on a document.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(
        &self,
        document: Document,
        config: GeneratorConfig,
        root: impl Into<PathBuf>,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(document, config, root);

        for phase in self.builtin.iter().chain(&self.phases) {
            tracing::debug!(phase = phase.name(), "{}", phase.description());
            phase
                .run(&mut ctx)
                .wrap_err_with(|| format!("{} phase failed", phase.name()))?;
        }

        Ok(ctx)
    }
}
