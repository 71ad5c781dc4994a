//! Place phase - assigns every output file its location.

use eyre::Result;

use crate::{
    generation::{Batch, placement_for},
    pipeline::{CompilationContext, Phase},
};

/// Phase that builds the batch and places every file under the output
/// directory according to the configured layout.
pub struct PlacePhase {
    extension: &'static str,
}

impl PlacePhase {
    pub fn new(extension: &'static str) -> Self {
        Self { extension }
    }
}

impl Phase for PlacePhase {
    fn name(&self) -> &'static str {
        "place"
    }

    fn description(&self) -> &'static str {
        "Assign an output location to every entity"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let entities = ctx.take_entities()?;
        let placement = placement_for(ctx.config.layout, &ctx.output_dir(), self.extension);

        let mut batch = Batch::new(entities);
        batch.place_all(placement.as_ref())?;
        tracing::debug!(files = batch.len(), layout = %ctx.config.layout, "placed files");

        ctx.batch = Some(batch);
        Ok(())
    }
}
