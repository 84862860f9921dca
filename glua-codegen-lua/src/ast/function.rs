//! Query binding functions.

use glua_codegen::{CodeFragment, ParamBinding, QueryBinding, RenameTable, Renderable, ReturnShape};

use super::{LuaClass, escape_pattern, long_string};
use crate::naming::{field_access, table_key};

/// A query binding rendered as a function on the global binding table,
/// preceded by its parameter and result classes.
///
/// ```lua
/// ---@param params GetUserParams
/// ---@return Users?
/// function DB.GetUser(params)
///     ...
/// end
/// ```
pub struct QueryFunction<'a> {
    table: &'a str,
    binding: &'a QueryBinding,
}

impl<'a> QueryFunction<'a> {
    pub fn new(table: &'a str, binding: &'a QueryBinding) -> Self {
        Self { table, binding }
    }

    fn driver(&self) -> String {
        format!("{}._driver", self.table)
    }

    fn annotations(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(params) = &self.binding.params_type {
            fragments.push(CodeFragment::annotation(format!(
                "@param params {}",
                params.name
            )));
        }
        match &self.binding.returns {
            ReturnShape::Nothing => {}
            ReturnShape::Single(ty) => {
                fragments.push(CodeFragment::annotation(format!("@return {}?", ty.name)));
            }
            ReturnShape::Sequence(ty) => {
                fragments.push(CodeFragment::annotation(format!("@return {}[]", ty.name)));
            }
        }
        fragments
    }

    fn header(&self) -> String {
        let arg = if self.binding.params.is_empty() {
            ""
        } else {
            "params"
        };
        format!("function {}.{}({})", self.table, self.binding.name, arg)
    }

    fn body(&self) -> Vec<CodeFragment> {
        let mut body = vec![CodeFragment::line(format!(
            "local sql = {}",
            long_string(&self.binding.sql)
        ))];
        body.extend(self.args());
        body.extend(self.fetch());
        body
    }

    fn args(&self) -> Vec<CodeFragment> {
        let params = &self.binding.params;
        if !self.binding.has_slices() {
            let values = params
                .iter()
                .map(|p| format!(", {}", field_access("params", &p.name)))
                .collect::<String>();
            return vec![CodeFragment::line(format!(
                "local args = {{ n = {}{} }}",
                params.len(),
                values
            ))];
        }

        let mut fragments = vec![CodeFragment::line("local args = { n = 0 }")];
        for param in params {
            if param.is_slice {
                fragments.extend(expand_slice(param));
            } else {
                fragments.extend(push_arg(&field_access("params", &param.name)));
            }
        }
        fragments
    }

    fn fetch(&self) -> Vec<CodeFragment> {
        let driver = self.driver();
        let renames = self.binding.renames.as_ref();

        match &self.binding.returns {
            ReturnShape::Nothing => vec![CodeFragment::line(format!(
                "{}.exec(sql, args)",
                driver
            ))],
            ReturnShape::Single(_) => match renames {
                None => vec![
                    CodeFragment::line(format!("local rows = {}.query(sql, args)", driver)),
                    CodeFragment::line("return rows[1]"),
                ],
                Some(renames) => vec![
                    CodeFragment::line(format!("local rows = {}.query(sql, args)", driver)),
                    CodeFragment::line("local row = rows[1]"),
                    CodeFragment::end_block(
                        "if row == nil then",
                        vec![CodeFragment::line("return nil")],
                    ),
                    CodeFragment::line(format!("return {}", rebuild_row(renames))),
                ],
            },
            ReturnShape::Sequence(_) => match renames {
                None => vec![CodeFragment::line(format!(
                    "return {}.query(sql, args)",
                    driver
                ))],
                Some(renames) => vec![
                    CodeFragment::line(format!("local rows = {}.query(sql, args)", driver)),
                    CodeFragment::line("local result = {}"),
                    CodeFragment::end_block(
                        "for i, row in ipairs(rows) do",
                        vec![CodeFragment::line(format!(
                            "result[i] = {}",
                            rebuild_row(renames)
                        ))],
                    ),
                    CodeFragment::line("return result"),
                ],
            },
        }
    }
}

/// Append one value to the positional argument list.
fn push_arg(value: &str) -> Vec<CodeFragment> {
    vec![
        CodeFragment::line("args.n = args.n + 1"),
        CodeFragment::line(format!("args[args.n] = {}", value)),
    ]
}

/// Expand a `sqlc.slice` marker to one placeholder per element and append
/// every element.
fn expand_slice(param: &ParamBinding) -> Vec<CodeFragment> {
    let values = field_access("params", &param.name);
    let marker = format!("/%*SLICE:{}%*/%?", escape_pattern(&param.raw_name));
    vec![
        CodeFragment::line(format!(
            "sql = sql:gsub(\"{}\", repeatString(\"?\", #{}), 1)",
            marker, values
        )),
        CodeFragment::end_block(
            format!("for _, value in ipairs({}) do", values),
            push_arg("value"),
        ),
    ]
}

/// A table constructor mapping output names to raw row columns.
fn rebuild_row(renames: &RenameTable) -> String {
    let entries = renames
        .iter()
        .map(|(raw, name)| format!("{} = {}", table_key(name), field_access("row", raw)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {} }}", entries)
}

impl Renderable for QueryFunction<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        for ty in [&self.binding.params_type, &self.binding.result_type]
            .into_iter()
            .flatten()
        {
            fragments.extend(LuaClass::from(ty).to_fragments());
            fragments.push(CodeFragment::blank());
        }

        fragments.extend(self.annotations());
        fragments.push(CodeFragment::end_block(self.header(), self.body()));
        fragments
    }
}
