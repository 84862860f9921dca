//! Lint for rename overrides that diverge from a reused table type.

use super::super::{Lint, LintInput};
use crate::{
    pipeline::Diagnostic,
    synthesis::{ReturnShapeResolver, TableIndex},
};

/// Warns when a query aliases a table model while a rename override changes
/// one of its field names.
///
/// Models never apply overrides, so rows returned by such a query carry
/// field names the aliased type does not declare.
pub struct ReusedTableRenameLint;

impl Lint for ReusedTableRenameLint {
    fn name(&self) -> &'static str {
        "reused-table-rename"
    }

    fn description(&self) -> &'static str {
        "Detect rename overrides on queries that reuse a table type"
    }

    fn check(&self, input: &LintInput<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let Some(catalog) = &input.request.catalog else {
            return;
        };
        let names = input.names();
        let index = TableIndex::new(catalog);
        let resolver = ReturnShapeResolver::new(&index);

        for query in &input.request.queries {
            if !query.command().is_ok_and(|c| c.returns_rows()) {
                continue;
            }
            let Some(table) = resolver.reusable_table(&query.columns) else {
                continue;
            };
            for column in query.columns.iter().filter(|c| names.is_renamed(&c.name)) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "query '{}' returns type '{}' but column '{}' is renamed to '{}', which the type does not declare",
                            query.name,
                            names.type_name(table.name()),
                            column.name,
                            names.field_name(&column.name)
                        ),
                    )
                    .at(format!("queries.{}.{}", query.name, column.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glua_options::Options;

    use super::*;
    use crate::testing::{FIXTURE_NAMING, users_request};

    fn check(options: &Options) -> Vec<Diagnostic> {
        let request = users_request();
        let input = LintInput {
            request: &request,
            options,
            naming: FIXTURE_NAMING,
        };
        let mut diagnostics = Vec::new();
        ReusedTableRenameLint.check(&input, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_no_renames() {
        assert!(check(&Options::new("DB")).is_empty());
    }

    #[test]
    fn test_renamed_column_on_reused_type() {
        let diagnostics = check(&Options::new("DB").with_rename("name", "displayName"));

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'Users'"));
        assert!(diagnostics[0].message.contains("'displayName'"));
        assert_eq!(diagnostics[0].location.as_deref(), Some("queries.GetUser.name"));
    }
}
