//! Language-agnostic binding synthesis for the glua sqlc plugin.
//!
//! This crate turns a parsed generate request into typed models and query
//! bindings that a target-language crate (e.g. `glua-codegen-lua`) renders.
//!
//! # Module Organization
//!
//! - [`language`] - Target abstractions (TypeMapper, TypeRegistry, NamingConvention, NameTranslator)
//! - [`synthesis`] - Table reuse detection, binding and model synthesis
//! - [`pipeline`] - Compilation phases, lints, diagnostics and plugins
//! - [`builder`] - Indented text building blocks (CodeBuilder, CodeFragment)
//! - [`generation`] - Output grouping and the file registry
//! - [`testing`] - Request fixtures (feature-gated)

pub mod builder;
mod error;
pub mod generation;
pub mod language;
pub mod pipeline;
pub mod synthesis;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use error::CodegenError;
pub use generation::{FileCategory, FileEntry, FileRegistry, QueryFileGroups, WriteStats};
pub use language::{
    GenerateResult, LanguageCodegen, NameTranslator, NamingConvention, PreviewFile, TypeMapper,
    TypeRegistry,
};
pub use pipeline::{CompilationContext, Diagnostic, Pipeline, Severity, TargetLanguage};
pub use synthesis::{
    BindingSynthesizer, Field, GeneratedType, ModelSynthesizer, ParamBinding, QueryBinding,
    RenameTable, ReturnShape, ReturnShapeResolver, TableIndex, TypeRef,
};
