//! Generate request types for the glua sqlc plugin.
//!
//! This crate mirrors the request sqlc hands to codegen plugins: the
//! settings, the schema catalog and the parsed queries. Everything the
//! generator reads comes from these types.
//!
//! # Architecture
//!
//! ```text
//! request.json → glua-ir (request) → glua-options (options) → glua-codegen → glua-codegen-lua
//! ```
//!
//! All collections are ordered `Vec`s so that serializing a request back to
//! JSON is deterministic.

mod catalog;
mod query;
mod request;

pub use catalog::{Catalog, Column, Identifier, Schema, Table, TypeName};
pub use query::{CommandKind, Parameter, Query};
pub use request::{Codegen, GenerateRequest, Settings};

/// Request fields a type does not model. They survive a parse and
/// serialize cycle so the request dump stays faithful.
pub type Extra = serde_json::Map<String, serde_json::Value>;
