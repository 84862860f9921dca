//! Lua string literal helpers.

/// Wrap `text` in a long bracket string whose level does not collide with
/// the text, e.g. `[[...]]` or `[==[...]==]`.
pub fn long_string(text: &str) -> String {
    // A newline right after the opening bracket is skipped by Lua.
    let leading = if text.starts_with('\n') || text.starts_with('\r') {
        "\n"
    } else {
        ""
    };

    let mut level = 0;
    loop {
        let equals = "=".repeat(level);
        let close = format!("]{}]", equals);
        let candidate = format!("{}{}", text, close);
        if candidate.find(&close) == Some(text.len()) {
            return format!("[{equals}[{leading}{text}{close}");
        }
        level += 1;
    }
}

/// Escape Lua pattern magic characters.
pub fn escape_pattern(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if "^$()%.[]*+-?".contains(c) {
            out.push('%');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(long_string("SELECT 1"), "[[SELECT 1]]");
    }

    #[test]
    fn test_level_avoids_closing_sequence() {
        assert_eq!(long_string("SELECT a[1]]"), "[=[SELECT a[1]]]=]");
        assert_eq!(long_string("x ]] y ]=] z"), "[==[x ]] y ]=] z]==]");
    }

    #[test]
    fn test_trailing_bracket() {
        assert_eq!(long_string("a]"), "[=[a]]=]");
        assert_eq!(long_string("a]="), "[[a]=]]");
    }

    #[test]
    fn test_leading_newline_is_preserved() {
        assert_eq!(long_string("\nSELECT 1"), "[[\n\nSELECT 1]]");
    }

    #[test]
    fn test_escape_pattern() {
        assert_eq!(escape_pattern("ids"), "ids");
        assert_eq!(escape_pattern("user.ids"), "user%.ids");
        assert_eq!(escape_pattern("/*SLICE:a-b*/?"), "/%*SLICE:a%-b%*/%?");
    }
}
