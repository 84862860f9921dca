//! Lua naming conventions.

use glua_codegen::NamingConvention;
use glua_core::{to_camel_case, to_pascal_case};
pub use glua_options::LUA_KEYWORDS;

/// Lua naming conventions.
pub const LUA_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_field: to_camel_case,
    reserved_words: LUA_KEYWORDS,
};

/// Whether `name` can be written as a bare Lua name.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    valid_start
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !LUA_NAMING.is_reserved(name)
}

/// `base.name`, or `base["name"]` when `name` is not a bare Lua name.
pub fn field_access(base: &str, name: &str) -> String {
    if is_identifier(name) {
        format!("{}.{}", base, name)
    } else {
        format!("{}[{}]", base, quote(name))
    }
}

/// A table constructor key: `name`, or `["name"]` when needed.
pub fn table_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("[{}]", quote(name))
    }
}

/// Double-quoted Lua string literal.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lua_naming() {
        assert_eq!(LUA_NAMING.type_name("user_accounts"), "UserAccounts");
        assert_eq!(LUA_NAMING.field_name("created_at"), "createdAt");
        assert!(LUA_NAMING.is_reserved("end"));
        assert!(!LUA_NAMING.is_reserved("self"));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("userId"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("user-id"));
        assert!(!is_identifier("end"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_field_access() {
        assert_eq!(field_access("params", "userId"), "params.userId");
        assert_eq!(field_access("row", "end"), "row[\"end\"]");
        assert_eq!(field_access("row", "first name"), "row[\"first name\"]");
    }

    #[test]
    fn test_table_key() {
        assert_eq!(table_key("uid"), "uid");
        assert_eq!(table_key("repeat"), "[\"repeat\"]");
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }

    #[test]
    fn test_keywords_rejected_by_names_and_options() {
        for keyword in LUA_KEYWORDS {
            assert!(!is_identifier(keyword), "{keyword}");
            let blob = serde_json::json!({ "global_lua_table": keyword });
            assert!(glua_options::Options::from_value(&blob).is_err(), "{keyword}");
        }
    }
}
