//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from request validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path the request was read from.
    pub request_path: PathBuf,
    pub table: String,
    pub model_count: usize,
    pub query_count: usize,
    /// Artifacts that would be generated, in emission order.
    pub files: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.request_path.display()));
        out.newline();
        out.key_value("Table", &self.table);
        out.key_value("Models", &self.model_count.to_string());
        out.key_value("Queries", &self.query_count.to_string());
        out.section(&format!("Files ({})", self.files.len()));
        for file in &self.files {
            out.list_item(file);
        }
    }
}
