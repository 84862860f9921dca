//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;
use glua_ir::Column;

use crate::{CodegenError, generation::WriteStats};

/// Trait for target code generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "lua")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "lua")
    fn file_extension(&self) -> &'static str;

    /// Render every artifact without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Write every artifact into the output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Artifacts written to disk
    pub written: Vec<String>,
    /// Artifacts whose content on disk was already up to date
    pub unchanged: Vec<String>,
}

impl From<WriteStats> for GenerateResult {
    fn from(stats: WriteStats) -> Self {
        Self {
            written: stats.written_paths,
            unchanged: stats.unchanged_paths,
        }
    }
}

/// A rendered artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from the output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Maps declared SQL column types to target type strings.
///
/// Implementors only provide the base lookup; [`TypeMapper::map_column`]
/// applies the collection and optional markers.
pub trait TypeMapper: Send + Sync {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Look up the target type for a declared SQL type.
    fn map_sql_type(&self, sql_type: &str) -> Option<String>;

    /// Suffix appended to repeated columns.
    fn collection_marker(&self) -> &'static str {
        "[]"
    }

    /// Suffix appended to nullable columns.
    fn optional_marker(&self) -> &'static str {
        "?"
    }

    /// Map a column to its full target type.
    ///
    /// The collection marker is applied before the optional marker, so a
    /// nullable array of integers becomes `number[]?`.
    fn map_column(&self, column: &Column) -> Result<String, CodegenError> {
        let mut ty = self.map_sql_type(column.type_name()).ok_or_else(|| {
            CodegenError::UnsupportedType {
                sql_type: column.type_name().to_string(),
            }
        })?;
        if column.is_repeated() {
            ty.push_str(self.collection_marker());
        }
        if !column.not_null {
            ty.push_str(self.optional_marker());
        }
        Ok(ty)
    }
}
