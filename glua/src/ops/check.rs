//! Check operation - request validation.

use std::path::Path;

use eyre::{Context, Result};
use glua_codegen::{LanguageCodegen, Pipeline, Severity};
use glua_codegen_lua::{Generator, lua_target};
use glua_ir::GenerateRequest;
use glua_options::Options;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the full pipeline and renders artifacts in memory, without writing.
pub fn check(request: GenerateRequest, options: Options, request_path: &Path) -> Result<CheckReport> {
    let ctx = Pipeline::new(lua_target(&options))
        .run(request, options)
        .wrap_err("Validation failed")?;

    let mut warnings = Vec::new();
    let mut infos = Vec::new();
    for diag in &ctx.diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };
        match diag.severity {
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
            Severity::Error => {}
        }
    }

    let table = ctx.options.global_lua_table.clone();
    let model_count = ctx.models.len();
    let query_count = ctx.bindings.len();
    let files = Generator::from_context(ctx)
        .preview()?
        .into_iter()
        .map(|f| f.path)
        .collect();

    Ok(CheckReport {
        request_path: request_path.to_path_buf(),
        table,
        model_count,
        query_count,
        files,
        warnings,
        infos,
    })
}

#[cfg(test)]
mod tests {
    use glua_codegen::testing::{QueryExt, query, users_request};

    use super::*;

    #[test]
    fn test_check_summary() {
        let request = users_request();
        let options = Options::from_request(&request).unwrap();
        let report = check(request, options, Path::new("request.json")).unwrap();

        assert_eq!(report.model_count, 1);
        assert_eq!(report.query_count, 2);
        assert_eq!(report.files[0], "users.sql.lua");
        assert!(report.warnings.is_empty());
        assert_eq!(report.infos, ["GetUser returns model Users"]);
    }

    #[test]
    fn test_check_rejects_duplicate_queries() {
        let mut request = users_request();
        request
            .queries
            .push(query("GetUser", ":exec", "DELETE FROM users").file("other.sql"));
        let options = Options::from_request(&request).unwrap();

        let err = check(request, options, Path::new("-")).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed");
        assert!(format!("{:?}", err).contains("duplicate query 'GetUser'"));
    }
}
