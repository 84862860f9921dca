//! Validate phase - runs lints on the request.

mod lint;
mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo, LintInput};
pub use lints::{DuplicateQueryLint, ReservedFieldLint, ReusedTableRenameLint};
use tracing::warn;

use crate::{
    NamingConvention,
    pipeline::{CompilationContext, Phase},
};

/// Phase that validates the request using configurable lints.
pub struct ValidatePhase {
    naming: NamingConvention,
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default lints.
    pub fn new(naming: NamingConvention) -> Self {
        Self {
            naming,
            lints: vec![
                Box::new(DuplicateQueryLint),
                Box::new(ReservedFieldLint),
                Box::new(ReusedTableRenameLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty(naming: NamingConvention) -> Self {
        Self {
            naming,
            lints: Vec::new(),
        }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check the request and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let input = LintInput {
            request: &ctx.request,
            options: &ctx.options,
            naming: self.naming,
        };
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(&input, &mut diagnostics);
        }
        for diag in diagnostics.iter().filter(|d| d.severity.is_warning()) {
            warn!(location = diag.location.as_deref(), "{}", diag.message);
        }
        ctx.diagnostics.extend(diagnostics);

        if ctx.has_errors() {
            let messages: Vec<String> = ctx.errors().map(|d| d.message.clone()).collect();
            bail!(
                "validation failed with {} error(s): {}",
                messages.len(),
                messages.join("; ")
            );
        }

        Ok(())
    }
}
