use glua_codegen::{CodeFragment, QueryBinding};
use glua_core::GeneratedFile;

use crate::{LuaFile, ast::QueryFunction};

/// The bindings declared in one query source file.
pub struct QueriesLua<'a> {
    table: &'a str,
    filename: &'a str,
    bindings: &'a [&'a QueryBinding],
}

impl<'a> QueriesLua<'a> {
    pub fn new(table: &'a str, filename: &'a str, bindings: &'a [&'a QueryBinding]) -> Self {
        Self {
            table,
            filename,
            bindings,
        }
    }
}

/// `repeatString("?", 3)` yields `?,?,?`; used to expand slice markers.
fn repeat_string_helper() -> CodeFragment {
    CodeFragment::end_block(
        "local function repeatString(str, count)",
        vec![
            CodeFragment::line("local result = {}"),
            CodeFragment::end_block(
                "for i = 1, count do",
                vec![CodeFragment::line("result[i] = str")],
            ),
            CodeFragment::line("return table.concat(result, \",\")"),
        ],
    )
}

impl GeneratedFile for QueriesLua<'_> {
    fn path(&self) -> String {
        format!("{}.lua", self.filename)
    }

    fn render(&self) -> String {
        LuaFile::generated()
            .header(CodeFragment::comment(format!("source: {}", self.filename)))
            .add(repeat_string_helper())
            .add_all(
                self.bindings
                    .iter()
                    .map(|binding| QueryFunction::new(self.table, binding)),
            )
            .render()
    }
}

#[cfg(test)]
mod tests {
    use glua_codegen::ReturnShape;
    use glua_ir::CommandKind;

    use super::*;

    #[test]
    fn test_queries_file() {
        let binding = QueryBinding {
            name: "Ping".into(),
            filename: "health.sql".into(),
            sql: "SELECT 1".into(),
            command: CommandKind::Exec,
            params: Vec::new(),
            params_type: None,
            result_type: None,
            returns: ReturnShape::Nothing,
            renames: None,
        };
        let bindings = [&binding];
        let file = QueriesLua::new("DB", "health.sql", &bindings);

        assert_eq!(file.path(), "health.sql.lua");
        let expected = "\
-- Code generated by sqlc-gen-glua. DO NOT EDIT.
-- source: health.sql

local function repeatString(str, count)
    local result = {}
    for i = 1, count do
        result[i] = str
    end
    return table.concat(result, \",\")
end

function DB.Ping()
    local sql = [[SELECT 1]]
    local args = { n = 0 }
    DB._driver.exec(sql, args)
end
";
        assert_eq!(file.render(), expected);
    }
}
