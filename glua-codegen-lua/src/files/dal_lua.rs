use glua_codegen::CodeFragment;
use glua_core::GeneratedFile;

use crate::{LuaFile, naming::quote};

/// `dal.lua`: the data access layer entry point.
///
/// Initializes the global binding table, stores the driver and loads every
/// other generated file.
pub struct DalLua<'a> {
    table: &'a str,
    files: Vec<String>,
}

impl<'a> DalLua<'a> {
    pub fn new(table: &'a str, files: Vec<String>) -> Self {
        Self { table, files }
    }

    /// `A = A or {}` for every prefix of a dotted table path.
    fn init(&self) -> Vec<CodeFragment> {
        let segments: Vec<&str> = self.table.split('.').collect();
        (1..=segments.len())
            .map(|n| {
                let path = segments[..n].join(".");
                CodeFragment::line(format!("{path} = {path} or {{}}"))
            })
            .collect()
    }

    fn driver_class(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::annotation("@class glua.Driver"),
            CodeFragment::annotation("@field query fun(sql: string, args: table): table[]"),
            CodeFragment::annotation("@field exec fun(sql: string, args: table)"),
        ]
    }

    fn set_driver(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::annotation("@param driver glua.Driver"),
            CodeFragment::end_block(
                format!("function {}.SetDriver(driver)", self.table),
                vec![CodeFragment::line(format!("{}._driver = driver", self.table))],
            ),
        ]
    }

    fn files_list(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("{}.Files = {{", self.table),
            self.files
                .iter()
                .map(|file| CodeFragment::line(format!("{},", quote(file))))
                .collect(),
            Some("}".to_string()),
        )]
    }

    fn load(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::annotation("@param loader? fun(path: string)"),
            CodeFragment::end_block(
                format!("function {}.Load(loader)", self.table),
                vec![
                    CodeFragment::line("loader = loader or include"),
                    CodeFragment::end_block(
                        format!("for _, file in ipairs({}.Files) do", self.table),
                        vec![CodeFragment::line("loader(file)")],
                    ),
                ],
            ),
        ]
    }
}

impl GeneratedFile for DalLua<'_> {
    fn path(&self) -> String {
        "dal.lua".to_string()
    }

    fn render(&self) -> String {
        LuaFile::generated()
            .add(self.init())
            .add(self.driver_class())
            .add(self.set_driver())
            .add(self.files_list())
            .add(self.load())
            .add(CodeFragment::line(format!("return {}", self.table)))
            .render()
    }
}
