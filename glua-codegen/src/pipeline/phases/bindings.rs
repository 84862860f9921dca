//! Bindings phase - one binding per query.

use eyre::Result;
use tracing::info;

use crate::{
    CodegenError, NameTranslator,
    pipeline::{CompilationContext, Phase, TargetLanguage},
    synthesis::{BindingSynthesizer, ReturnShapeResolver, TableIndex},
};

pub struct BindingsPhase {
    target: TargetLanguage,
}

impl BindingsPhase {
    pub fn new(target: TargetLanguage) -> Self {
        Self { target }
    }
}

impl Phase for BindingsPhase {
    fn name(&self) -> &'static str {
        "bindings"
    }

    fn description(&self) -> &'static str {
        "Synthesize parameter types, result types and rename tables per query"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let catalog = ctx
            .request
            .catalog
            .as_ref()
            .ok_or(CodegenError::MissingCatalog)?;
        let index = TableIndex::new(catalog);
        let synthesizer = BindingSynthesizer::new(
            self.target.mapper.as_ref(),
            NameTranslator::new(self.target.naming, &ctx.options.rename),
            ReturnShapeResolver::new(&index),
        );

        let bindings = synthesizer.synthesize_all(&ctx.request.queries)?;
        let mut reused = 0;
        for binding in &bindings {
            if let Some(ty) = binding.returns.type_ref().filter(|t| t.reused) {
                reused += 1;
                ctx.add_info("bindings", format!("{} returns model {}", binding.name, ty.name));
            }
        }
        info!(
            bindings = bindings.len(),
            reused, "synthesized query bindings"
        );

        ctx.bindings = bindings;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glua_options::Options;

    use super::*;
    use crate::{
        Severity,
        testing::{FIXTURE_NAMING, FixtureMapper, users_request},
    };

    #[test]
    fn test_reused_models_reported_as_info() {
        let mut ctx = CompilationContext::new(users_request(), Options::new("DB"));
        let target = TargetLanguage::new(FixtureMapper::new(), FIXTURE_NAMING);

        BindingsPhase::new(target).run(&mut ctx).unwrap();

        assert_eq!(ctx.bindings.len(), 2);
        let infos: Vec<_> = ctx
            .diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Info))
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(infos, ["GetUser returns model Users"]);
        assert!(!ctx.has_warnings());
    }
}
