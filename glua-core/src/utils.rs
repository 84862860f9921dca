//! Shared utility functions for code generation.

/// Uppercase the first character of a segment, leaving the rest untouched.
fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a snake_case string to PascalCase (e.g., "get_user_by_id" -> "GetUserById")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_').map(capitalize).collect()
}

/// Convert a snake_case string to camelCase (e.g., "created_at" -> "createdAt")
///
/// The first segment is kept verbatim; every following segment is capitalized.
pub fn to_camel_case(s: &str) -> String {
    s.split('_')
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.to_string()
            } else {
                capitalize(part)
            }
        })
        .collect()
}
