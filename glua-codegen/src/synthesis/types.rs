//! Synthesized types and bindings.

use glua_ir::CommandKind;
use indexmap::IndexMap;
use serde::Serialize;

/// Ordered raw column name to output identifier map of one query.
pub type RenameTable = IndexMap<String, String>;

/// A field of a generated type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    /// Target type string, markers included.
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A named record type with ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedType {
    pub name: String,
    pub fields: Vec<Field>,
}

impl GeneratedType {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Reference to the type a query returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeRef {
    pub name: String,
    /// True when the name refers to an existing table model.
    pub reused: bool,
}

impl TypeRef {
    pub fn synthesized(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reused: false,
        }
    }

    pub fn reused(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reused: true,
        }
    }
}

/// What a query binding returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "type", rename_all = "lowercase")]
pub enum ReturnShape {
    Nothing,
    Single(TypeRef),
    Sequence(TypeRef),
}

impl ReturnShape {
    pub fn type_ref(&self) -> Option<&TypeRef> {
        match self {
            ReturnShape::Nothing => None,
            ReturnShape::Single(ty) | ReturnShape::Sequence(ty) => Some(ty),
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, ReturnShape::Sequence(_))
    }
}

/// A bound query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamBinding {
    /// Column name as sqlc reported it.
    pub raw_name: String,
    /// Output identifier.
    pub name: String,
    pub ty: String,
    pub not_null: bool,
    /// Expanded from a `sqlc.slice` placeholder.
    pub is_slice: bool,
}

/// Everything a target needs to render one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryBinding {
    pub name: String,
    /// Source file the query was declared in.
    pub filename: String,
    pub sql: String,
    pub command: CommandKind,
    pub params: Vec<ParamBinding>,
    pub params_type: Option<GeneratedType>,
    /// Present only when the result type is synthesized for this query.
    pub result_type: Option<GeneratedType>,
    pub returns: ReturnShape,
    /// Present only when at least one output name differs from its raw name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renames: Option<RenameTable>,
}

impl QueryBinding {
    pub fn has_slices(&self) -> bool {
        self.params.iter().any(|p| p.is_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_shape_accessors() {
        let many = ReturnShape::Sequence(TypeRef::reused("Users"));
        assert!(many.is_sequence());
        assert_eq!(many.type_ref().map(|t| t.name.as_str()), Some("Users"));

        assert!(ReturnShape::Nothing.type_ref().is_none());
        assert!(!ReturnShape::Single(TypeRef::synthesized("GetUserResult")).is_sequence());
    }

    #[test]
    fn test_return_shape_serialization() {
        let json = serde_json::to_value(ReturnShape::Single(TypeRef::reused("Users"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "single", "type": { "name": "Users", "reused": true } })
        );
        let nothing = serde_json::to_value(ReturnShape::Nothing).unwrap();
        assert_eq!(nothing, serde_json::json!({ "kind": "nothing" }));
    }
}
