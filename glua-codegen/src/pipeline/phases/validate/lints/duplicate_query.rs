//! Lint for duplicate query names.

use std::collections::HashMap;

use super::super::{Lint, LintInput};
use crate::pipeline::Diagnostic;

/// Errors when two queries share a name, since both would bind the same
/// function and parameter type.
pub struct DuplicateQueryLint;

impl Lint for DuplicateQueryLint {
    fn name(&self) -> &'static str {
        "duplicate-query"
    }

    fn description(&self) -> &'static str {
        "Detect queries that share a name"
    }

    fn check(&self, input: &LintInput<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for query in &input.request.queries {
            if let Some(first_file) = seen.get(query.name.as_str()) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "duplicate query '{}' in {} (first declared in {})",
                            query.name, query.filename, first_file
                        ),
                    )
                    .at(format!("queries.{}", query.name)),
                );
            } else {
                seen.insert(&query.name, &query.filename);
            }
        }
    }
}
