//! Language-agnostic code generation traits.

use std::path::PathBuf;

use eyre::Result;
use kiln_core::{ScalarType, WriteMode, capitalize_first};

use crate::{generation::ImportRecord, ir::Entity};

/// Token a [`FileTemplate`] body must contain exactly where imports go.
pub const IMPORTS_PLACEHOLDER: &str = "#!{IMPORTS}";

/// Trait for mapping schema types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a scalar to a language-specific type name
    fn map_scalar(&self, scalar: ScalarType) -> &'static str;

    /// Mark a type as a list (e.g., `Post[]` in TS)
    fn map_list(&self, ty: &str) -> String {
        format!("{}[]", ty)
    }

    /// Runtime type named in documentation metadata for a scalar
    fn doc_type(&self, scalar: ScalarType) -> String {
        capitalize_first(self.map_scalar(scalar))
    }
}

/// Renders the body of a class file and its import statements.
pub trait FileTemplate {
    /// Render the file body for `entity`.
    ///
    /// The body must contain [`IMPORTS_PLACEHOLDER`] once.
    fn body(&self, entity: &Entity) -> String;

    /// Render one import statement (without trailing newline).
    fn render_import(&self, record: &ImportRecord) -> String;
}

/// Trait for language-specific class generators.
pub trait LanguageCodegen {
    /// Render every file without touching the disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Render and hand every file to the write sink
    fn generate(&self, mode: WriteMode) -> Result<GenerateResult>;
}

/// A rendered file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written to disk
    pub written: Vec<PathBuf>,
    /// Files rendered but not written (dry run)
    pub previewed: Vec<PreviewFile>,
}

impl GenerateResult {
    /// Number of files produced, written or not.
    pub fn len(&self) -> usize {
        self.written.len() + self.previewed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
