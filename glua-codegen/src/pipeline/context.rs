//! State shared by pipeline phases.

use glua_ir::GenerateRequest;
use glua_options::Options;

use super::diagnostic::{Diagnostic, Severity};
use crate::synthesis::{GeneratedType, QueryBinding};

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// The request being compiled.
    pub request: GenerateRequest,
    /// Parsed plugin options.
    pub options: Options,
    /// One model per catalog table (populated by ModelsPhase).
    pub models: Vec<GeneratedType>,
    /// One binding per query (populated by BindingsPhase).
    pub bindings: Vec<QueryBinding>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(request: GenerateRequest, options: Options) -> Self {
        Self {
            request,
            options,
            models: Vec::new(),
            bindings: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}
