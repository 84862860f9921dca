//! Pipeline plugin hooks.

use eyre::Result;

use super::CompilationContext;

/// Receives callbacks before and after every phase.
///
/// Returning an error from a hook aborts the pipeline.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
