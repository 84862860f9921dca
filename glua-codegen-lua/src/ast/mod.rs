//! Lua AST nodes that lower to [`CodeFragment`](glua_codegen::CodeFragment)s.

mod class;
mod function;
mod strings;

pub use class::LuaClass;
pub use function::QueryFunction;
pub use strings::{escape_pattern, long_string};
