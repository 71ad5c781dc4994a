//! Register phase - collects imports with deferred entity origins.

use eyre::Result;

use crate::pipeline::{CompilationContext, Phase};

pub struct RegisterPhase;

impl Phase for RegisterPhase {
    fn name(&self) -> &'static str {
        "register"
    }

    fn description(&self) -> &'static str {
        "Register the imports of every output file"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let enum_module = ctx.config.enum_module.clone();
        ctx.batch_mut()?.register_all(&enum_module);
        Ok(())
    }
}
