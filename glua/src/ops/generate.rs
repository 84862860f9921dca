//! Generate operation - Lua bindings from a generate request.

use std::path::Path;

use eyre::{Context, Result};
use glua_codegen::{LanguageCodegen, Pipeline, pipeline::SnapshotPlugin};
use glua_codegen_lua::{Generator, lua_target};
use glua_ir::GenerateRequest;
use glua_options::Options;
use tracing::info;

use crate::reports::{GenerateReport, GenerationResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the request and renders every Lua artifact.
pub fn generate(
    request: GenerateRequest,
    options: Options,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let debug_dir = opts.output_dir.join(".glua/debug");

    let mut pipeline = Pipeline::new(lua_target(&options));
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let ctx = pipeline.run(request, options).wrap_err("Pipeline failed")?;

    let warnings = ctx.warnings().map(|d| d.message.clone()).collect();
    let table = ctx.options.global_lua_table.clone();
    let model_count = ctx.models.len();
    let query_count = ctx.bindings.len();

    let generator = Generator::from_context(ctx);
    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview()?)
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        info!(
            written = written.written.len(),
            unchanged = written.unchanged.len(),
            "generation finished"
        );
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: written.written,
            unchanged: written.unchanged,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        table,
        model_count,
        query_count,
        warnings,
        result,
    })
}
