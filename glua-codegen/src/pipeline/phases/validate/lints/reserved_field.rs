//! Lint for identifiers that collide with reserved words.

use super::super::{Lint, LintInput};
use crate::pipeline::Diagnostic;

/// Warns when a field or parameter identifier is a reserved word of the
/// target language.
pub struct ReservedFieldLint;

impl Lint for ReservedFieldLint {
    fn name(&self) -> &'static str {
        "reserved-field"
    }

    fn description(&self) -> &'static str {
        "Detect field and parameter names that are reserved words"
    }

    fn check(&self, input: &LintInput<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let names = input.names();
        let naming = input.naming;

        if let Some(catalog) = &input.request.catalog {
            for (_, table) in catalog.tables() {
                for column in &table.columns {
                    let field = naming.field_name(&column.name);
                    if naming.is_reserved(&field) {
                        diagnostics.push(
                            Diagnostic::warning(
                                "validate",
                                format!(
                                    "field '{}' of table '{}' is a reserved word",
                                    field,
                                    table.name()
                                ),
                            )
                            .at(format!("tables.{}.{}", table.name(), column.name)),
                        );
                    }
                }
            }
        }

        for query in &input.request.queries {
            let columns = query
                .params
                .iter()
                .map(|p| &p.column)
                .chain(query.columns.iter());
            for column in columns {
                let field = names.field_name(&column.name);
                if naming.is_reserved(&field) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "identifier '{}' in query '{}' is a reserved word; add a rename override for '{}'",
                                field, query.name, column.name
                            ),
                        )
                        .at(format!("queries.{}.{}", query.name, column.name)),
                    );
                }
            }
        }
    }
}
