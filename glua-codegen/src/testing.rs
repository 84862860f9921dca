//! Request fixtures for tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use glua_core::{to_camel_case, to_pascal_case};
use glua_ir::{
    Catalog, Codegen, Column, GenerateRequest, Identifier, Parameter, Query, Schema, Settings,
    Table, TypeName,
};

use crate::{NamingConvention, TypeMapper, TypeRegistry};

/// Naming used by fixtures: PascalCase types, camelCase fields, Lua keywords.
pub const FIXTURE_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_field: to_camel_case,
    reserved_words: &["and", "end", "function", "local", "nil", "not", "or", "return"],
};

/// Minimal mapper: integers and reals to `number`, text to `string`.
///
/// `uuid` is deliberately left unregistered.
pub struct FixtureMapper {
    registry: TypeRegistry,
}

impl FixtureMapper {
    pub fn new() -> Self {
        Self {
            registry: TypeRegistry::new()
                .with_all(&["integer", "int", "real"], "number")
                .with_all(&["text", "varchar"], "string")
                .with("boolean", "boolean"),
        }
    }
}

impl Default for FixtureMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeMapper for FixtureMapper {
    fn language(&self) -> &'static str {
        "fixture"
    }

    fn map_sql_type(&self, sql_type: &str) -> Option<String> {
        self.registry.lookup(sql_type).map(str::to_string)
    }
}

/// A nullable column with no owning table.
pub fn column(name: &str, sql_type: &str) -> Column {
    Column {
        name: name.to_string(),
        ty: TypeName {
            name: sql_type.to_string(),
            ..TypeName::default()
        },
        ..Column::default()
    }
}

/// Builder-style tweaks for fixture columns.
pub trait ColumnExt {
    fn not_null(self) -> Self;
    fn repeated(self) -> Self;
    fn slice(self) -> Self;
    fn from_table(self, table: &str) -> Self;
}

impl ColumnExt for Column {
    fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    fn repeated(mut self) -> Self {
        self.is_array = true;
        self
    }

    fn slice(mut self) -> Self {
        self.is_sqlc_slice = true;
        self
    }

    fn from_table(mut self, table: &str) -> Self {
        self.table = Some(Identifier::named(table));
        self
    }
}

/// A table whose columns are stamped with the table as owner.
pub fn table(name: &str, columns: Vec<Column>) -> Table {
    Table {
        rel: Identifier::named(name),
        columns: columns
            .into_iter()
            .map(|c| c.from_table(name))
            .collect(),
        ..Table::default()
    }
}

/// A catalog with a single `main` schema.
pub fn catalog(tables: Vec<Table>) -> Catalog {
    Catalog {
        default_schema: "main".to_string(),
        schemas: vec![Schema {
            name: "main".to_string(),
            tables,
            ..Schema::default()
        }],
        ..Catalog::default()
    }
}

/// `users (id INTEGER NOT NULL, name TEXT)`
pub fn users_catalog() -> Catalog {
    catalog(vec![table(
        "users",
        vec![
            column("id", "integer").not_null(),
            column("name", "text"),
        ],
    )])
}

/// A query declared in `query.sql`.
pub fn query(name: &str, cmd: &str, text: &str) -> Query {
    Query {
        name: name.to_string(),
        cmd: cmd.to_string(),
        text: text.to_string(),
        filename: "query.sql".to_string(),
        ..Query::default()
    }
}

/// Builder-style tweaks for fixture queries.
pub trait QueryExt {
    fn param(self, column: Column) -> Self;
    fn columns(self, columns: Vec<Column>) -> Self;
    fn file(self, filename: &str) -> Self;
}

impl QueryExt for Query {
    fn param(mut self, column: Column) -> Self {
        let number = i32::try_from(self.params.len() + 1).unwrap_or(i32::MAX);
        self.params.push(Parameter {
            number,
            column,
            ..Parameter::default()
        });
        self
    }

    fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    fn file(mut self, filename: &str) -> Self {
        self.filename = filename.to_string();
        self
    }
}

/// A request with the given catalog, queries and raw options blob.
pub fn request(
    catalog: Option<Catalog>,
    queries: Vec<Query>,
    options: serde_json::Value,
) -> GenerateRequest {
    GenerateRequest {
        settings: Settings {
            version: "2".to_string(),
            engine: "sqlite".to_string(),
            codegen: Codegen {
                out: "lua".to_string(),
                plugin: "glua".to_string(),
                options: Some(options),
                ..Codegen::default()
            },
            ..Settings::default()
        },
        catalog,
        queries,
        sqlc_version: "v1.27.0".to_string(),
        ..GenerateRequest::default()
    }
}

/// The users catalog with `GetUser` (reuses `Users`) and `DeleteUser`.
pub fn users_request() -> GenerateRequest {
    let get_user = query("GetUser", ":one", "SELECT id, name FROM users WHERE id = ?")
        .file("users.sql")
        .param(column("id", "integer").not_null().from_table("users"))
        .columns(vec![
            column("id", "integer").not_null().from_table("users"),
            column("name", "text").from_table("users"),
        ]);
    let delete_user = query("DeleteUser", ":exec", "DELETE FROM users WHERE id = ?")
        .file("users.sql")
        .param(column("id", "integer").not_null().from_table("users"));

    request(
        Some(users_catalog()),
        vec![get_user, delete_user],
        serde_json::json!({ "global_lua_table": "DB" }),
    )
}
