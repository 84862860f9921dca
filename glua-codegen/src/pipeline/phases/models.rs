//! Models phase - one record type per catalog table.

use eyre::Result;
use tracing::info;

use crate::{
    pipeline::{CompilationContext, Phase, TargetLanguage},
    synthesis::ModelSynthesizer,
};

pub struct ModelsPhase {
    target: TargetLanguage,
}

impl ModelsPhase {
    pub fn new(target: TargetLanguage) -> Self {
        Self { target }
    }
}

impl Phase for ModelsPhase {
    fn name(&self) -> &'static str {
        "models"
    }

    fn description(&self) -> &'static str {
        "Synthesize one record type per catalog table"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let synthesizer = ModelSynthesizer::new(self.target.mapper.as_ref(), self.target.naming);
        ctx.models = synthesizer.synthesize(ctx.request.catalog.as_ref())?;
        info!(models = ctx.models.len(), "synthesized table models");
        Ok(())
    }
}
