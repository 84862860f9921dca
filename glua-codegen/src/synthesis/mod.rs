//! Binding synthesis engine.
//!
//! Composes the target [`TypeMapper`](crate::TypeMapper) and
//! [`NameTranslator`](crate::NameTranslator) into models and per-query
//! bindings:
//!
//! - [`TableIndex`] / [`ReturnShapeResolver`] - result shapes and table-type reuse
//! - [`BindingSynthesizer`] - one [`QueryBinding`] per query
//! - [`ModelSynthesizer`] - one [`GeneratedType`] per catalog table

mod binding;
mod model;
mod return_shape;
mod types;

pub use binding::BindingSynthesizer;
pub use model::ModelSynthesizer;
pub use return_shape::{ReturnShapeResolver, TableIndex};
pub use types::{
    Field, GeneratedType, ParamBinding, QueryBinding, RenameTable, ReturnShape, TypeRef,
};
