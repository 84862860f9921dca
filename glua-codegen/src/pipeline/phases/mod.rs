//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the request
//! - [`ModelsPhase`] - synthesizes table models
//! - [`BindingsPhase`] - synthesizes query bindings

mod bindings;
mod models;
mod validate;

pub use bindings::BindingsPhase;
pub use models::ModelsPhase;
pub use validate::{
    DuplicateQueryLint, Lint, LintInfo, LintInput, ReservedFieldLint, ReusedTableRenameLint,
    ValidatePhase,
};
