//! Target language abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for target code generators
//! - [`TypeMapper`] - SQL column type to target type mapping
//! - [`TypeRegistry`] - Injectable SQL type table backing a mapper
//! - [`NamingConvention`] - Case rules and reserved words of a target
//! - [`NameTranslator`] - Naming convention plus project rename overrides

mod naming;
mod registry;
mod traits;

pub use naming::{NameTranslator, NamingConvention};
pub use registry::TypeRegistry;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
