//! Core utilities and types for the glua sqlc plugin.
//!
//! This crate provides the string helpers and file abstractions shared by
//! every other glua crate.

mod file;
mod utils;

// File operations
pub use file::{File, GeneratedFile, WriteResult, write_file};
// String utilities
pub use utils::{to_camel_case, to_pascal_case};
