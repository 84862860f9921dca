use glua_codegen::GeneratedType;
use glua_core::GeneratedFile;

use crate::{LuaFile, ast::LuaClass};

/// `models.lua`: one class per catalog table.
pub struct ModelsLua<'a> {
    models: &'a [GeneratedType],
}

impl<'a> ModelsLua<'a> {
    pub fn new(models: &'a [GeneratedType]) -> Self {
        Self { models }
    }
}

impl GeneratedFile for ModelsLua<'_> {
    fn path(&self) -> String {
        "models.lua".to_string()
    }

    fn render(&self) -> String {
        LuaFile::generated()
            .add_all(self.models.iter().map(LuaClass::from))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use glua_codegen::Field;

    use super::*;

    #[test]
    fn test_models_file() {
        let models = vec![
            GeneratedType {
                name: "Users".into(),
                fields: vec![Field::new("id", "number"), Field::new("name", "string?")],
            },
            GeneratedType {
                name: "Posts".into(),
                fields: vec![Field::new("userId", "number")],
            },
        ];

        let expected = "\
-- Code generated by sqlc-gen-glua. DO NOT EDIT.

---@class Users
---@field id number
---@field name string?

---@class Posts
---@field userId number
";
        assert_eq!(ModelsLua::new(&models).render(), expected);
    }

    #[test]
    fn test_empty_catalog_renders_banner() {
        assert_eq!(
            ModelsLua::new(&[]).render(),
            "-- Code generated by sqlc-gen-glua. DO NOT EDIT.\n"
        );
    }
}
