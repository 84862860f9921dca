//! Injectable SQL type registry.

use glua_options::TypeOverride;
use indexmap::IndexMap;

/// Table from declared SQL type names to target type names.
///
/// Keys are matched case-insensitively. A parameterized type such as
/// `VARCHAR(255)` falls back to its base name when not registered verbatim.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: IndexMap<String, String>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mapping, replacing any previous one for the same SQL type.
    pub fn register(&mut self, sql_type: &str, target: impl Into<String>) -> &mut Self {
        self.entries.insert(normalize(sql_type), target.into());
        self
    }

    /// Register a mapping (consuming).
    pub fn with(mut self, sql_type: &str, target: impl Into<String>) -> Self {
        self.register(sql_type, target);
        self
    }

    /// Register several SQL types that map to the same target type.
    pub fn with_all(mut self, sql_types: &[&str], target: &str) -> Self {
        for sql_type in sql_types {
            self.register(sql_type, target);
        }
        self
    }

    /// Apply user type overrides on top of the current entries.
    pub fn with_overrides(mut self, overrides: &[TypeOverride]) -> Self {
        for entry in overrides {
            self.register(&entry.db_type, entry.lua_type.clone());
        }
        self
    }

    /// Look up the target type for a declared SQL type.
    pub fn lookup(&self, sql_type: &str) -> Option<&str> {
        let key = normalize(sql_type);
        if let Some(target) = self.entries.get(&key) {
            return Some(target.as_str());
        }
        let base = key.split('(').next().unwrap_or_default().trim_end();
        self.entries.get(base).map(String::as_str)
    }

    /// Whether a SQL type is registered.
    pub fn contains(&self, sql_type: &str) -> bool {
        self.lookup(sql_type).is_some()
    }

    /// Number of registered SQL types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(sql_type: &str) -> String {
    sql_type.trim().to_ascii_lowercase()
}
