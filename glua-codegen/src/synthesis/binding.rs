//! Per-query binding synthesis.

use glua_ir::{Column, Query};
use tracing::debug;

use super::{
    Field, GeneratedType, ParamBinding, QueryBinding, RenameTable, ReturnShape,
    ReturnShapeResolver,
};
use crate::{CodegenError, NameTranslator, TypeMapper};

/// Builds a [`QueryBinding`] for each query of a request.
pub struct BindingSynthesizer<'s> {
    mapper: &'s dyn TypeMapper,
    names: NameTranslator<'s>,
    resolver: ReturnShapeResolver<'s, 's>,
}

impl<'s> BindingSynthesizer<'s> {
    pub fn new(
        mapper: &'s dyn TypeMapper,
        names: NameTranslator<'s>,
        resolver: ReturnShapeResolver<'s, 's>,
    ) -> Self {
        Self {
            mapper,
            names,
            resolver,
        }
    }

    /// Synthesize bindings for every query, stopping at the first failure.
    pub fn synthesize_all(&self, queries: &[Query]) -> Result<Vec<QueryBinding>, CodegenError> {
        queries.iter().map(|q| self.synthesize(q)).collect()
    }

    /// Synthesize the binding of one query.
    ///
    /// Errors are wrapped with the query name.
    pub fn synthesize(&self, query: &Query) -> Result<QueryBinding, CodegenError> {
        self.build(query).map_err(|e| e.in_query(&query.name))
    }

    fn build(&self, query: &Query) -> Result<QueryBinding, CodegenError> {
        if query.text.trim().is_empty() {
            return Err(CodegenError::EmptyQuery);
        }
        let command = query
            .command()
            .map_err(|_| CodegenError::UnknownCommand {
                cmd: query.cmd.clone(),
            })?;

        let params = query
            .params
            .iter()
            .map(|p| self.param(&p.column))
            .collect::<Result<Vec<_>, _>>()?;

        let params_type = (!params.is_empty()).then(|| GeneratedType {
            name: self.names.params_type_name(&query.name),
            fields: params
                .iter()
                .map(|p| Field::new(&p.name, &p.ty))
                .collect(),
        });

        let returns = self
            .resolver
            .resolve(&query.name, command, &query.columns, &self.names);

        let result_type = match returns.type_ref() {
            Some(ty) if !ty.reused => Some(GeneratedType {
                name: ty.name.clone(),
                fields: self.fields(&query.columns)?,
            }),
            _ => None,
        };

        let renames = match returns {
            ReturnShape::Nothing => None,
            _ => self.rename_table(&query.columns),
        };

        debug!(
            query = %query.name,
            command = %command,
            params = params.len(),
            renamed = renames.is_some(),
            "synthesized binding"
        );

        Ok(QueryBinding {
            name: query.name.clone(),
            filename: query.filename.clone(),
            sql: query.text.clone(),
            command,
            params,
            params_type,
            result_type,
            returns,
            renames,
        })
    }

    fn param(&self, column: &Column) -> Result<ParamBinding, CodegenError> {
        Ok(ParamBinding {
            raw_name: column.name.clone(),
            name: self.names.field_name(&column.name),
            ty: self.mapper.map_column(column)?,
            not_null: column.not_null,
            is_slice: column.is_sqlc_slice,
        })
    }

    fn fields(&self, columns: &[Column]) -> Result<Vec<Field>, CodegenError> {
        columns
            .iter()
            .map(|c| -> Result<Field, CodegenError> {
                Ok(Field::new(self.names.field_name(&c.name), self.mapper.map_column(c)?))
            })
            .collect()
    }

    /// Raw to output names of the result columns, or `None` for an identity mapping.
    fn rename_table(&self, columns: &[Column]) -> Option<RenameTable> {
        let table: RenameTable = columns
            .iter()
            .map(|c| (c.name.clone(), self.names.field_name(&c.name)))
            .collect();

        if table.iter().all(|(raw, name)| raw == name) {
            None
        } else {
            Some(table)
        }
    }
}

#[cfg(test)]
mod tests {
    use glua_ir::CommandKind;
    use glua_options::RenameMap;

    use super::*;
    use crate::{
        TableIndex, TypeRef,
        testing::{ColumnExt, FIXTURE_NAMING, FixtureMapper, QueryExt, column, query, users_catalog},
    };

    fn synthesize(query: &Query, renames: &RenameMap) -> Result<QueryBinding, CodegenError> {
        let catalog = users_catalog();
        let index = TableIndex::new(&catalog);
        let mapper = FixtureMapper::new();
        let synthesizer = BindingSynthesizer::new(
            &mapper,
            NameTranslator::new(FIXTURE_NAMING, renames),
            ReturnShapeResolver::new(&index),
        );
        synthesizer.synthesize(query)
    }

    fn users_columns() -> Vec<Column> {
        vec![
            column("id", "integer").not_null().from_table("users"),
            column("name", "text").from_table("users"),
        ]
    }

    #[test]
    fn test_reused_result_emits_no_type() {
        let q = query("GetUser", ":one", "SELECT id, name FROM users WHERE id = ?")
            .param(column("id", "integer").not_null().from_table("users"))
            .columns(users_columns());

        let binding = synthesize(&q, &RenameMap::new()).unwrap();

        assert_eq!(binding.command, CommandKind::One);
        assert_eq!(binding.returns, ReturnShape::Single(TypeRef::reused("Users")));
        assert!(binding.result_type.is_none());
        assert!(binding.renames.is_none());

        let params = binding.params_type.unwrap();
        assert_eq!(params.name, "GetUserParams");
        assert_eq!(params.fields, vec![Field::new("id", "number")]);
    }

    #[test]
    fn test_synthesized_result_type() {
        let q = query("list_user_names", ":many", "SELECT name, created_at FROM users")
            .columns(vec![
                column("name", "text").from_table("users"),
                column("created_at", "integer").not_null(),
            ]);

        let binding = synthesize(&q, &RenameMap::new()).unwrap();

        assert!(binding.returns.is_sequence());
        assert!(binding.params_type.is_none());
        let result = binding.result_type.unwrap();
        assert_eq!(result.name, "ListUserNamesResult");
        assert_eq!(
            result.fields,
            vec![Field::new("name", "string?"), Field::new("createdAt", "number")]
        );

        let renames = binding.renames.unwrap();
        assert_eq!(renames.get("created_at").map(String::as_str), Some("createdAt"));
        assert_eq!(renames.get("name").map(String::as_str), Some("name"));
    }

    #[test]
    fn test_exec_has_no_return_type() {
        let q = query("DeleteUser", ":exec", "DELETE FROM users WHERE id = ?")
            .param(column("id", "integer").not_null());

        let binding = synthesize(&q, &RenameMap::new()).unwrap();

        assert_eq!(binding.returns, ReturnShape::Nothing);
        assert!(binding.result_type.is_none());
        assert!(binding.renames.is_none());
    }

    #[test]
    fn test_rename_override_applies_everywhere() {
        let mut renames = RenameMap::new();
        renames.insert("user_id".into(), "uid".into());

        let q = query("GetPosts", ":many", "SELECT user_id, title FROM posts WHERE user_id = ?")
            .param(column("user_id", "integer").not_null())
            .columns(vec![
                column("user_id", "integer").not_null().from_table("posts"),
                column("title", "text").not_null().from_table("posts"),
            ]);

        let binding = synthesize(&q, &renames).unwrap();

        assert_eq!(binding.params[0].name, "uid");
        assert_eq!(binding.params[0].raw_name, "user_id");
        assert_eq!(binding.params_type.unwrap().fields[0].name, "uid");
        let result = binding.result_type.unwrap();
        assert_eq!(result.fields[0].name, "uid");
        assert!(result.fields.iter().all(|f| f.name != "userId"));
        assert_eq!(
            binding.renames.unwrap().get("user_id").map(String::as_str),
            Some("uid")
        );
    }

    #[test]
    fn test_slice_param() {
        let q = query("ListByIds", ":many", "SELECT id, name FROM users WHERE id IN (/*SLICE:ids*/?)")
            .param(column("ids", "integer").not_null().slice())
            .columns(users_columns());

        let binding = synthesize(&q, &RenameMap::new()).unwrap();

        assert!(binding.has_slices());
        assert_eq!(binding.params[0].ty, "number[]");
    }

    #[test]
    fn test_empty_query_text() {
        let q = query("Broken", ":exec", "   ");
        let err = synthesize(&q, &RenameMap::new()).unwrap_err();

        assert!(matches!(&err, CodegenError::Query { query, .. } if query == "Broken"));
        assert!(matches!(err.root_cause(), CodegenError::EmptyQuery));
    }

    #[test]
    fn test_unknown_command() {
        let q = query("CopyUsers", ":copyfrom", "INSERT INTO users (name) VALUES (?)");
        let err = synthesize(&q, &RenameMap::new()).unwrap_err();

        assert!(matches!(
            err.root_cause(),
            CodegenError::UnknownCommand { cmd } if cmd == ":copyfrom"
        ));
    }

    #[test]
    fn test_unsupported_param_type_names_query() {
        let q = query("GetByToken", ":one", "SELECT id, name FROM users WHERE token = ?")
            .param(column("token", "uuid").not_null())
            .columns(users_columns());
        let err = synthesize(&q, &RenameMap::new()).unwrap_err();

        assert!(matches!(&err, CodegenError::Query { query, .. } if query == "GetByToken"));
        assert!(matches!(
            err.root_cause(),
            CodegenError::UnsupportedType { sql_type } if sql_type == "uuid"
        ));
    }
}
