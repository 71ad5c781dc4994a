//! The unit of work the pipeline is made of.

use eyre::Result;

use super::CompilationContext;

/// One step over the shared [`CompilationContext`].
///
/// The built-in order is validate, convert, place, register, resolve.
/// Placement must finish for every file before any import is resolved,
/// since resolution needs the location of the target entity's file.
pub trait Phase: Send + Sync {
    /// Short identifier used in logs and in the wrapped error message.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Fails only on fatal problems; anything recoverable belongs in
    /// `ctx.diagnostics`.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
