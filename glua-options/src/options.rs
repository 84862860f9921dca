//! Typed plugin options.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Project-wide map from raw column name to output identifier.
///
/// Keeps the order the overrides were written in.
pub type RenameMap = IndexMap<String, String>;

/// Options accepted in the codegen `options` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Global Lua table every generated binding is attached to.
    #[serde(default)]
    pub global_lua_table: String,

    /// Column rename overrides.
    #[serde(default)]
    pub rename: RenameMap,

    /// Additional SQL type registrations.
    #[serde(default)]
    pub overrides: Vec<TypeOverride>,

    /// Keys this plugin does not recognize. They are accepted and ignored.
    #[serde(flatten)]
    pub unknown: serde_json::Map<String, serde_json::Value>,
}

impl Options {
    /// Create options for the given binding table with no overrides.
    pub fn new(global_lua_table: impl Into<String>) -> Self {
        Self {
            global_lua_table: global_lua_table.into(),
            ..Self::default()
        }
    }

    /// Add a rename override.
    pub fn with_rename(mut self, column: impl Into<String>, name: impl Into<String>) -> Self {
        self.rename.insert(column.into(), name.into());
        self
    }

    /// Add a type override.
    pub fn with_override(mut self, db_type: impl Into<String>, lua_type: impl Into<String>) -> Self {
        self.overrides.push(TypeOverride {
            db_type: db_type.into(),
            lua_type: lua_type.into(),
        });
        self
    }

    /// Look up the override for a raw column name.
    pub fn renamed(&self, column: &str) -> Option<&str> {
        self.rename
            .get(column)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// Maps a declared SQL type to a target type, extending the built-in table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOverride {
    pub db_type: String,
    pub lua_type: String,
}
