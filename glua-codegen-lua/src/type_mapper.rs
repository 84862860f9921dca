//! Lua type mapper implementation.

use glua_codegen::{TypeMapper, TypeRegistry};
use glua_options::TypeOverride;

const NUMBER_TYPES: &[&str] = &[
    "integer",
    "int",
    "int2",
    "int4",
    "int8",
    "smallint",
    "mediumint",
    "tinyint",
    "bigint",
    "serial",
    "bigserial",
    "real",
    "float",
    "float4",
    "float8",
    "double",
    "double precision",
    "numeric",
    "decimal",
];

const STRING_TYPES: &[&str] = &[
    "text",
    "varchar",
    "character varying",
    "char",
    "character",
    "nchar",
    "nvarchar",
    "clob",
    "blob",
    "date",
    "time",
    "datetime",
    "timestamp",
    "timestamptz",
    "json",
    "jsonb",
];

const BOOLEAN_TYPES: &[&str] = &["boolean", "bool"];

/// Maps SQL column types to LuaLS type names.
///
/// Collections are written `T[]` and nullable values `T?`.
#[derive(Debug, Clone)]
pub struct LuaTypeMapper {
    registry: TypeRegistry,
}

impl LuaTypeMapper {
    /// Mapper with the built-in SQL type table.
    pub fn new() -> Self {
        Self {
            registry: TypeRegistry::new()
                .with_all(NUMBER_TYPES, "number")
                .with_all(STRING_TYPES, "string")
                .with_all(BOOLEAN_TYPES, "boolean"),
        }
    }

    /// Apply user type overrides on top of the built-in table.
    pub fn with_overrides(self, overrides: &[TypeOverride]) -> Self {
        Self {
            registry: self.registry.with_overrides(overrides),
        }
    }
}

impl Default for LuaTypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeMapper for LuaTypeMapper {
    fn language(&self) -> &'static str {
        "lua"
    }

    fn map_sql_type(&self, sql_type: &str) -> Option<String> {
        self.registry.lookup(sql_type).map(str::to_string)
    }
}
