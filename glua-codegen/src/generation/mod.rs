//! Output assembly.
//!
//! - [`QueryFileGroups`] - bindings grouped by source file in first-seen order
//! - [`FileRegistry`] - ordered artifact registration and writing

mod groups;
mod registry;

pub use groups::QueryFileGroups;
pub use registry::{FileCategory, FileEntry, FileRegistry, WriteStats};
