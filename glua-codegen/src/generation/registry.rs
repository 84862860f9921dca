//! Declarative artifact registration.
//!
//! Generators register every artifact with a category, then preview or
//! write them in one pass:
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::queries("users.sql.lua", users));
//! registry.register(FileEntry::models("models.lua", models));
//! registry.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use glua_core::{File, WriteResult};

use crate::language::PreviewFile;

/// Category of an artifact. Artifacts are emitted in category order, and in
/// registration order within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileCategory {
    /// Per-source-file query bindings.
    Queries,
    /// Table models.
    Models,
    /// Data access layer entry point.
    Dal,
    /// Runtime shims copied verbatim.
    Runtime,
    /// Request dump for inspection.
    Diagnostic,
}

/// An artifact to be generated.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from the output directory.
    pub path: String,
    pub content: String,
    pub category: FileCategory,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>, category: FileCategory) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
        }
    }

    pub fn queries(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Queries)
    }

    pub fn models(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Models)
    }

    pub fn dal(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Dal)
    }

    pub fn runtime(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Runtime)
    }

    pub fn diagnostic(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Diagnostic)
    }

    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write this artifact below `base`, skipping identical content.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.full_path(base);
        File::new(&path, self.content.as_str())
            .write()
            .wrap_err_with(|| format!("failed to write {}", path.display()))
    }
}

/// Collects artifacts and emits them in a stable order.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        self.entries.extend(entries);
    }

    /// All entries sorted by category; the sort is stable.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.category);
        sorted.into_iter()
    }

    pub fn entries_by_category(&self, category: FileCategory) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered artifacts in emission order.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.entries()
            .map(|e| PreviewFile {
                path: e.path.clone(),
                content: e.content.clone(),
            })
            .collect()
    }

    /// Write every artifact below `base` in emission order.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            match entry.write(base)? {
                WriteResult::Written => {
                    stats.written += 1;
                    stats.written_paths.push(entry.path.clone());
                }
                WriteResult::Unchanged => {
                    stats.unchanged += 1;
                    stats.unchanged_paths.push(entry.path.clone());
                }
            }
        }

        Ok(stats)
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    pub written: usize,
    /// Artifacts already up to date on disk.
    pub unchanged: usize,
    pub written_paths: Vec<String>,
    pub unchanged_paths: Vec<String>,
}

impl WriteStats {
    pub fn total(&self) -> usize {
        self.written + self.unchanged
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_category_order_is_stable() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::diagnostic("request.json", "{}"));
        registry.register(FileEntry::dal("dal.lua", ""));
        registry.register(FileEntry::queries("users.sql.lua", ""));
        registry.register(FileEntry::runtime("drivers/gmod.lua", ""));
        registry.register(FileEntry::models("models.lua", ""));
        registry.register(FileEntry::queries("posts.sql.lua", ""));
        registry.register(FileEntry::runtime("drivers/libsql.lua", ""));

        let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "users.sql.lua",
                "posts.sql.lua",
                "models.lua",
                "dal.lua",
                "drivers/gmod.lua",
                "drivers/libsql.lua",
                "request.json",
            ]
        );
        assert_eq!(registry.entries_by_category(FileCategory::Queries).count(), 2);
    }

    #[test]
    fn test_write_all_creates_directories() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::models("models.lua", "-- models"));
        registry.register(FileEntry::runtime("drivers/gmod.lua", "-- gmod"));

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written, 2);
        assert_eq!(stats.total(), 2);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("drivers/gmod.lua")).unwrap(),
            "-- gmod"
        );
    }

    #[test]
    fn test_rewrite_identical_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::models("models.lua", "-- models"));

        registry.write_all(temp.path()).unwrap();
        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written, 0);
        assert_eq!(stats.unchanged, 1);
        assert_eq!(stats.unchanged_paths, vec!["models.lua"]);
    }

    #[test]
    fn test_preview_matches_entries() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::dal("dal.lua", "return DB"));
        registry.register(FileEntry::queries("q.sql.lua", "-- q"));

        let preview = registry.preview();
        assert_eq!(preview[0].path, "q.sql.lua");
        assert_eq!(preview[1].content, "return DB");
    }
}
