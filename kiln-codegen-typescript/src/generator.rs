//! TypeScript class generator.

use std::path::PathBuf;

use eyre::Result;
use kiln_codegen::{
    generation::Batch,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::{CompilationContext, Pipeline},
};
use kiln_core::{WriteMode, WriteResult};
use kiln_schema::{Document, GeneratorConfig};

use crate::{TypeScriptTypeMapper, files::ClassTs};

/// TypeScript code generator that produces one decorated class per model.
pub struct Generator {
    batch: Batch,
}

impl LanguageCodegen for Generator {
    fn preview(&self) -> Result<Vec<PreviewFile>> {
        let files = self.batch.render_all(&ClassTs)?;
        Ok(files
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path().to_path_buf(),
                content: file.content().to_string(),
            })
            .collect())
    }

    fn generate(&self, mode: WriteMode) -> Result<GenerateResult> {
        // Render everything before the first write
        let files = self.batch.render_all(&ClassTs)?;

        let mut result = GenerateResult::default();
        for file in files {
            match file.write(mode)? {
                WriteResult::Written => result.written.push(file.path().to_path_buf()),
                WriteResult::Previewed => result.previewed.push(PreviewFile {
                    path: file.path().to_path_buf(),
                    content: file.content().to_string(),
                }),
            }
        }

        tracing::debug!(
            written = result.written.len(),
            previewed = result.previewed.len(),
            "generated typescript classes"
        );
        Ok(result)
    }
}

impl Generator {
    /// The pipeline that prepares a context for this generator.
    pub fn pipeline() -> Pipeline {
        Pipeline::new(TypeScriptTypeMapper, "ts")
    }

    /// Create a generator from a context that went through [`Generator::pipeline`].
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        Ok(Self {
            batch: ctx.take_batch()?,
        })
    }

    /// Run the pipeline and build a generator in one step.
    pub fn from_document(
        document: Document,
        config: GeneratorConfig,
        root: impl Into<PathBuf>,
    ) -> Result<Self> {
        let ctx = Self::pipeline().run(document, config, root)?;
        Self::from_context(ctx)
    }

    /// Number of files this generator produces.
    pub fn len(&self) -> usize {
        self.batch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }
}
