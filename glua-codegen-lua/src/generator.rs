use std::path::Path;

use eyre::Result;
use glua_codegen::{
    CompilationContext, FileEntry, FileRegistry, GenerateResult, LanguageCodegen, PreviewFile,
    QueryFileGroups, WriteStats,
};
use glua_core::GeneratedFile;
use tracing::debug;

use crate::files::{DRIVERS, DalLua, ModelsLua, QueriesLua, RequestJson};

/// Lua code generator over a completed compilation context.
pub struct Generator {
    ctx: CompilationContext,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "lua"
    }

    fn file_extension(&self) -> &'static str {
        "lua"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self.registry()?.preview())
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.write(output_dir).map(GenerateResult::from)
    }
}

impl Generator {
    pub fn from_context(ctx: CompilationContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &CompilationContext {
        &self.ctx
    }

    /// Write every artifact below `output_dir`.
    pub fn write(&self, output_dir: &Path) -> Result<WriteStats> {
        let stats = self.registry()?.write_all(output_dir)?;
        debug!(
            written = stats.written,
            unchanged = stats.unchanged,
            dir = %output_dir.display(),
            "wrote artifacts"
        );
        Ok(stats)
    }

    /// Register every artifact in emission order.
    pub fn registry(&self) -> Result<FileRegistry> {
        let table = self.ctx.options.global_lua_table.as_str();
        let mut registry = FileRegistry::new();

        let groups = QueryFileGroups::new(&self.ctx.bindings);
        let mut query_files = Vec::with_capacity(groups.len());
        for (filename, bindings) in groups.iter() {
            let file = QueriesLua::new(table, filename, bindings);
            debug!(path = %file.path(), queries = bindings.len(), "rendered query file");
            query_files.push(file.path());
            registry.register(FileEntry::queries(file.path(), file.render()));
        }

        let models = ModelsLua::new(&self.ctx.models);
        registry.register(FileEntry::models(models.path(), models.render()));

        let files = std::iter::once(models.path()).chain(query_files).collect();
        let dal = DalLua::new(table, files);
        registry.register(FileEntry::dal(dal.path(), dal.render()));

        registry.register_all(
            DRIVERS
                .iter()
                .map(|driver| FileEntry::runtime(driver.path(), driver.render())),
        );

        let request = RequestJson::new(&self.ctx.request);
        registry.register(FileEntry::diagnostic(request.path(), request.render()?));

        Ok(registry)
    }
}
