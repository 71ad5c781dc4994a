//! Convert phase - raw models to entities.

use eyre::Result;

use crate::{
    convert::{ConvertOptions, convert_models},
    language::TypeMapper,
    pipeline::{CompilationContext, Phase},
};

/// Phase that converts every model of the document.
pub struct ConvertPhase {
    mapper: Box<dyn TypeMapper + Send + Sync>,
}

impl ConvertPhase {
    pub fn new(mapper: impl TypeMapper + Send + Sync + 'static) -> Self {
        Self {
            mapper: Box::new(mapper),
        }
    }
}

impl Phase for ConvertPhase {
    fn name(&self) -> &'static str {
        "convert"
    }

    fn description(&self) -> &'static str {
        "Convert raw models into entities"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let options = ConvertOptions::from(&ctx.config);
        let entities = convert_models(&ctx.document, &options, self.mapper.as_ref())?;
        tracing::debug!(
            language = self.mapper.language(),
            entities = entities.len(),
            "converted document"
        );
        ctx.entities = Some(entities);
        Ok(())
    }
}
