//! Pipeline orchestrator.

use std::{fmt, sync::Arc};

use eyre::Result;
use glua_ir::GenerateRequest;
use glua_options::Options;
use tracing::debug;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{BindingsPhase, ModelsPhase, ValidatePhase},
};
use crate::{NamingConvention, TypeMapper};

/// The target a pipeline synthesizes for.
#[derive(Clone)]
pub struct TargetLanguage {
    pub mapper: Arc<dyn TypeMapper>,
    pub naming: NamingConvention,
}

impl TargetLanguage {
    pub fn new(mapper: impl TypeMapper + 'static, naming: NamingConvention) -> Self {
        Self {
            mapper: Arc::new(mapper),
            naming,
        }
    }
}

impl fmt::Debug for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetLanguage")
            .field("language", &self.mapper.language())
            .finish()
    }
}

/// Runs the built-in phases (validate, models, bindings), then any extra
/// phases, calling plugin hooks around each one.
///
/// ```ignore
/// let pipeline = Pipeline::new(target)
///     .plugin(SnapshotPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(request, options)?;
/// ```
pub struct Pipeline {
    target: TargetLanguage,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new(target: TargetLanguage) -> Self {
        Self {
            target,
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a request.
    ///
    /// The first fatal failure aborts the run; no partial context is returned.
    pub fn run(&self, request: GenerateRequest, options: Options) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(request, options);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ValidatePhase::new(self.target.naming)),
            Box::new(ModelsPhase::new(self.target.clone())),
            Box::new(BindingsPhase::new(self.target.clone())),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}
