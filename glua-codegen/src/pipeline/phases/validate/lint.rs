//! Lint trait for request validation.

use glua_ir::GenerateRequest;
use glua_options::Options;

use crate::{NameTranslator, NamingConvention, pipeline::Diagnostic};

/// What a lint gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct LintInput<'a> {
    pub request: &'a GenerateRequest,
    pub options: &'a Options,
    pub naming: NamingConvention,
}

impl<'a> LintInput<'a> {
    /// Name translator with the project's rename overrides.
    pub fn names(&self) -> NameTranslator<'a> {
        NameTranslator::new(self.naming, &self.options.rename)
    }
}

/// Name and description of a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A check over the request that reports diagnostics.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, input: &LintInput<'_>, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
