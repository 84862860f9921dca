//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// Name and description of a phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase in the compilation pipeline.
///
/// Phases run in order and may read and modify the context. Non-fatal issues
/// are recorded as diagnostics; returning an error aborts the run.
pub trait Phase: Send + Sync {
    /// Name used in diagnostics, plugin hooks and snapshot file names.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
