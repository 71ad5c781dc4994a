//! Resolve phase - rewrites deferred imports into relative module paths.

use eyre::Result;

use crate::{
    generation::PathResolver,
    pipeline::{CompilationContext, Phase},
};

/// Runs once every file is placed.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Rewrite entity imports into relative module paths"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let resolver = PathResolver::new(ctx.root());
        let rewritten = ctx.batch_mut()?.resolve_all(&resolver)?;
        tracing::debug!(rewritten, "resolved entity imports");
        Ok(())
    }
}
