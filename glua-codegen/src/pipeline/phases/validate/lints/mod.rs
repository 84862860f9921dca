//! Built-in lints.

mod duplicate_query;
mod reserved_field;
mod reused_table_rename;

pub use duplicate_query::DuplicateQueryLint;
pub use reserved_field::ReservedFieldLint;
pub use reused_table_rename::ReusedTableRenameLint;
