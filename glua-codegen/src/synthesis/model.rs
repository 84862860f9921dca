//! Table model synthesis.

use glua_ir::{Catalog, Table};
use tracing::debug;

use super::{Field, GeneratedType};
use crate::{CodegenError, NamingConvention, TypeMapper};

/// Builds one record type per catalog table.
///
/// Model field names always follow the naming convention; rename overrides
/// are not applied here.
pub struct ModelSynthesizer<'s> {
    mapper: &'s dyn TypeMapper,
    naming: NamingConvention,
}

impl<'s> ModelSynthesizer<'s> {
    pub fn new(mapper: &'s dyn TypeMapper, naming: NamingConvention) -> Self {
        Self { mapper, naming }
    }

    /// Synthesize models for every table of every schema, in catalog order.
    pub fn synthesize(&self, catalog: Option<&Catalog>) -> Result<Vec<GeneratedType>, CodegenError> {
        let catalog = catalog.ok_or(CodegenError::MissingCatalog)?;
        catalog
            .tables()
            .map(|(_, table)| self.model(table))
            .collect()
    }

    /// Synthesize the model of a single table.
    pub fn model(&self, table: &Table) -> Result<GeneratedType, CodegenError> {
        let fields = table
            .columns
            .iter()
            .map(|c| -> Result<Field, CodegenError> {
                Ok(Field::new(self.naming.field_name(&c.name), self.mapper.map_column(c)?))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.in_table(table.name()))?;

        debug!(table = table.name(), fields = fields.len(), "synthesized model");
        Ok(GeneratedType {
            name: self.naming.type_name(table.name()),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        ColumnExt, FIXTURE_NAMING, FixtureMapper, catalog, column, table, users_catalog,
    };

    #[test]
    fn test_users_model() {
        let mapper = FixtureMapper::new();
        let models = ModelSynthesizer::new(&mapper, FIXTURE_NAMING)
            .synthesize(Some(&users_catalog()))
            .unwrap();

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "Users");
        assert_eq!(
            models[0].fields,
            vec![Field::new("id", "number"), Field::new("name", "string?")]
        );
    }

    #[test]
    fn test_models_ignore_renames_and_keep_order() {
        let mapper = FixtureMapper::new();
        let catalog = catalog(vec![
            table("user_accounts", vec![column("user_id", "integer").not_null()]),
            table("audit_log", vec![column("entry", "text").not_null()]),
        ]);

        let models = ModelSynthesizer::new(&mapper, FIXTURE_NAMING)
            .synthesize(Some(&catalog))
            .unwrap();

        let names: Vec<_> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["UserAccounts", "AuditLog"]);
        assert_eq!(models[0].fields[0].name, "userId");
    }

    #[test]
    fn test_missing_catalog() {
        let mapper = FixtureMapper::new();
        let err = ModelSynthesizer::new(&mapper, FIXTURE_NAMING)
            .synthesize(None)
            .unwrap_err();

        assert!(matches!(err, CodegenError::MissingCatalog));
    }

    #[test]
    fn test_unsupported_type_names_table() {
        let mapper = FixtureMapper::new();
        let catalog = catalog(vec![table(
            "sessions",
            vec![column("token", "uuid").not_null()],
        )]);

        let err = ModelSynthesizer::new(&mapper, FIXTURE_NAMING)
            .synthesize(Some(&catalog))
            .unwrap_err();

        assert!(matches!(&err, CodegenError::Table { table, .. } if table == "sessions"));
        assert!(matches!(
            err.root_cause(),
            CodegenError::UnsupportedType { sql_type } if sql_type == "uuid"
        ));
    }
}
