//! LuaLS class annotations.

use glua_codegen::{CodeFragment, GeneratedType, Renderable};

/// A `---@class` annotation block with one `---@field` line per field.
#[derive(Debug, Clone)]
pub struct LuaClass {
    name: String,
    fields: Vec<(String, String)>,
}

impl LuaClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push((name.into(), ty.into()));
        self
    }
}

impl From<&GeneratedType> for LuaClass {
    fn from(ty: &GeneratedType) -> Self {
        ty.fields
            .iter()
            .fold(LuaClass::new(&ty.name), |class, f| class.field(&f.name, &f.ty))
    }
}

impl Renderable for LuaClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        std::iter::once(CodeFragment::annotation(format!("@class {}", self.name)))
            .chain(
                self.fields
                    .iter()
                    .map(|(name, ty)| CodeFragment::annotation(format!("@field {} {}", name, ty))),
            )
            .collect()
    }
}
