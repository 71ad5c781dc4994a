//! Mutable state threaded through the pipeline.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use kiln_schema::{Document, GeneratorConfig};

use super::diagnostic::{Diagnostic, Severity};
use crate::{generation::Batch, ir::Entity};

/// Everything phases read and produce. Stage outputs start empty and are
/// filled in as the phases that own them complete.
#[derive(Debug)]
pub struct CompilationContext {
    pub document: Document,
    pub config: GeneratorConfig,
    /// Anchor for relative config paths.
    pub root: PathBuf,
    /// Set by the convert phase, consumed by the place phase.
    pub entities: Option<Vec<Entity>>,
    /// Set by the place phase.
    pub batch: Option<Batch>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(document: Document, config: GeneratorConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            document,
            config,
            root: root.into(),
            entities: None,
            batch: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.config.output_path(&self.root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of diagnostics at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.count(Severity::Warning) > 0
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    pub fn batch(&self) -> Result<&Batch> {
        self.batch.as_ref().ok_or_else(|| missing("batch", "place"))
    }

    pub fn batch_mut(&mut self) -> Result<&mut Batch> {
        self.batch.as_mut().ok_or_else(|| missing("batch", "place"))
    }

    pub fn take_entities(&mut self) -> Result<Vec<Entity>> {
        self.entities.take().ok_or_else(|| missing("entities", "convert"))
    }

    pub fn take_batch(&mut self) -> Result<Batch> {
        self.batch.take().ok_or_else(|| missing("batch", "place"))
    }
}

fn missing(what: &str, phase: &str) -> eyre::Report {
    eyre!("{what} not available; the {phase} phase has not run")
}
