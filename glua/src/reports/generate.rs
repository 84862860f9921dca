//! Generate command report data structures.

use std::path::PathBuf;

use glua_codegen_lua::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Global binding table name.
    pub table: String,
    pub model_count: usize,
    pub query_count: usize,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub written: Vec<String>,
    /// Files whose content was already up to date.
    pub unchanged: Vec<String>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        out.preformatted(&format!(
            "{}: {} {}, {} {}",
            self.table,
            self.model_count,
            plural(self.model_count, "model"),
            self.query_count,
            plural(self.query_count, "query"),
        ));
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(path);
        }
        if !written.unchanged.is_empty() {
            out.preformatted(&format!("  {} unchanged", written.unchanged.len()));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

fn plural(count: usize, word: &str) -> String {
    match (count, word) {
        (1, _) => word.to_string(),
        (_, "query") => "queries".to_string(),
        _ => format!("{}s", word),
    }
}
