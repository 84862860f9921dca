//! Schema catalog types.

use serde::{Deserialize, Serialize};

use crate::Extra;

/// Full schema metadata for the target database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub comment: String,
    pub default_schema: String,
    pub name: String,
    pub schemas: Vec<Schema>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Catalog {
    /// Iterate over every table of every schema, in catalog order.
    pub fn tables(&self) -> impl Iterator<Item = (&Schema, &Table)> {
        self.schemas
            .iter()
            .flat_map(|schema| schema.tables.iter().map(move |table| (schema, table)))
    }
}

/// A named schema holding tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    pub comment: String,
    pub name: String,
    pub tables: Vec<Table>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A table and its ordered columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    pub rel: Identifier,
    pub columns: Vec<Column>,
    pub comment: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Table {
    /// The raw table name.
    pub fn name(&self) -> &str {
        &self.rel.name
    }
}

/// A possibly qualified relation name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Identifier {
    pub catalog: String,
    pub schema: String,
    pub name: String,
}

impl Identifier {
    /// Create an unqualified identifier.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Declared SQL type of a column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeName {
    pub catalog: String,
    pub schema: String,
    pub name: String,
}

/// A column, either from a catalog table or from a query projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    pub name: String,
    pub not_null: bool,
    pub is_array: bool,
    pub is_sqlc_slice: bool,
    pub comment: String,
    pub length: i32,
    /// Owning table, when the column can be traced back to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Identifier>,
    #[serde(rename = "type")]
    pub ty: TypeName,
    /// Fields this crate does not model, kept for the request dump.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Column {
    /// The declared SQL type name.
    pub fn type_name(&self) -> &str {
        &self.ty.name
    }

    /// Name of the owning table, if known.
    pub fn table_name(&self) -> Option<&str> {
        self.table
            .as_ref()
            .map(|t| t.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Whether the column holds a collection of values.
    pub fn is_repeated(&self) -> bool {
        self.is_array || self.is_sqlc_slice
    }
}
