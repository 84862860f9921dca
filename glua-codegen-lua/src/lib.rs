//! Lua target for the glua sqlc plugin.
//!
//! Renders synthesized models and query bindings as LuaLS-annotated Lua,
//! alongside the data access layer, the runtime driver shims and a dump of
//! the request.
//!
//! ```ignore
//! let files = glua_codegen_lua::generate(request)?;
//! for file in files {
//!     println!("{}", file.path);
//! }
//! ```

mod generator;
mod lua_file;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

use eyre::Result;
pub use glua_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
use glua_codegen::{Pipeline, TargetLanguage};
use glua_ir::GenerateRequest;
use glua_options::Options;
pub use generator::Generator;
pub use lua_file::{GENERATED_BANNER, LuaFile};
pub use naming::{LUA_KEYWORDS, LUA_NAMING, field_access, is_identifier, table_key};
pub use type_mapper::LuaTypeMapper;

/// The Lua target configured with the project's type overrides.
pub fn lua_target(options: &Options) -> TargetLanguage {
    TargetLanguage::new(
        LuaTypeMapper::new().with_overrides(&options.overrides),
        LUA_NAMING,
    )
}

/// Parse options, run the pipeline and render every artifact.
pub fn generate(request: GenerateRequest) -> Result<Vec<PreviewFile>> {
    let options = Options::from_request(&request)?;
    let ctx = Pipeline::new(lua_target(&options)).run(request, options)?;
    Generator::from_context(ctx).preview()
}
