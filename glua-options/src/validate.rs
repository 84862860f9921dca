//! Semantic validation of parsed options.

use crate::{Options, Result, SourceContext};

/// Lua 5.1 keywords plus `goto`.
pub const LUA_KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Validate options after parsing.
pub(crate) fn validate_options(options: &Options, ctx: &SourceContext) -> Result<()> {
    if options.global_lua_table.is_empty() {
        return Err(ctx.missing_option("global_lua_table"));
    }

    for segment in options.global_lua_table.split('.') {
        if let Some(reason) = validate_identifier(segment) {
            return Err(ctx.invalid_identifier(
                "global_lua_table",
                &options.global_lua_table,
                reason,
            ));
        }
    }

    for (column, name) in &options.rename {
        if name.is_empty() {
            return Err(ctx.validation_error_at(
                format!("rename target for column '{}' is empty", column),
                column,
            ));
        }
    }

    for (i, entry) in options.overrides.iter().enumerate() {
        if entry.db_type.is_empty() || entry.lua_type.is_empty() {
            return Err(ctx.validation_error_at(
                format!("override #{} needs both db_type and lua_type", i + 1),
                "overrides",
            ));
        }
    }

    Ok(())
}

/// Check that `name` is a plain Lua identifier, returning the reason if not.
pub(crate) fn validate_identifier(name: &str) -> Option<String> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("empty segment".to_string()),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Some(format!("'{}' cannot start with '{}'", name, c));
        }
        _ => {}
    }
    if let Some(c) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Some(format!("'{}' contains '{}'", name, c));
    }
    if LUA_KEYWORDS.contains(&name) {
        return Some(format!("'{}' is a Lua keyword", name));
    }
    None
}
