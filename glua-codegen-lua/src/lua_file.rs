//! Structured Lua file assembly.

use glua_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Banner written at the top of every generated Lua artifact.
pub const GENERATED_BANNER: &str = "Code generated by sqlc-gen-glua. DO NOT EDIT.";

/// A Lua file made of a header and body elements separated by blank lines.
///
/// ```ignore
/// let content = LuaFile::generated()
///     .header(CodeFragment::comment("source: users.sql"))
///     .add(LuaClass::from(&model))
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct LuaFile {
    header: Vec<CodeFragment>,
    body: Vec<Vec<CodeFragment>>,
}

impl LuaFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file whose header starts with [`GENERATED_BANNER`].
    pub fn generated() -> Self {
        Self::new().header(CodeFragment::comment(GENERATED_BANNER))
    }

    /// Append to the header.
    pub fn header(mut self, node: impl Renderable) -> Self {
        self.header.extend(node.to_fragments());
        self
    }

    /// Add a body element.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, node: impl Renderable) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body
            .extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty()
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::lua();

        for fragment in &self.header {
            builder.apply_fragment(fragment.clone());
        }
        if !self.header.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
