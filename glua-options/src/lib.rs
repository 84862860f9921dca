//! Plugin options parsing and validation.
//!
//! sqlc forwards the `options` block of the codegen settings as an opaque
//! JSON object. This crate turns it into typed [`Options`] and reports
//! configuration mistakes as [`miette`] diagnostics.
//!
//! ```ignore
//! let options = Options::from_request(&request)?;
//! println!("bindings live in {}", options.global_lua_table);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod options;
mod parse;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use options::{Options, RenameMap, TypeOverride};
pub use parse::parse_options;
pub use validate::LUA_KEYWORDS;
