//! Naming conventions and rename-aware name translation.

use glua_options::RenameMap;

/// Target-specific naming conventions.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a snake_case name into a type name (e.g. "user_accounts" -> "UserAccounts")
    pub to_type: fn(&str) -> String,
    /// Transform a snake_case name into a field name (e.g. "user_id" -> "userId")
    pub to_field: fn(&str) -> String,
    /// Reserved words of the target language
    pub reserved_words: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Transform a raw name into a type name.
    pub fn type_name(&self, name: &str) -> String {
        (self.to_type)(name)
    }

    /// Transform a raw name into a field name.
    pub fn field_name(&self, name: &str) -> String {
        (self.to_field)(name)
    }
}

/// Applies project rename overrides on top of a [`NamingConvention`].
///
/// Overrides only ever affect field and parameter identifiers. Type names
/// always follow the convention.
#[derive(Debug, Clone, Copy)]
pub struct NameTranslator<'a> {
    naming: NamingConvention,
    renames: &'a RenameMap,
}

impl<'a> NameTranslator<'a> {
    pub fn new(naming: NamingConvention, renames: &'a RenameMap) -> Self {
        Self { naming, renames }
    }

    /// The output identifier for a raw column name.
    pub fn field_name(&self, raw: &str) -> String {
        match self.renames.get(raw).filter(|name| !name.is_empty()) {
            Some(name) => name.clone(),
            None => self.naming.field_name(raw),
        }
    }

    /// The type name for a raw table or query name.
    pub fn type_name(&self, raw: &str) -> String {
        self.naming.type_name(raw)
    }

    /// `<QueryName>Params`
    pub fn params_type_name(&self, query: &str) -> String {
        format!("{}Params", self.type_name(query))
    }

    /// `<QueryName>Result`
    pub fn result_type_name(&self, query: &str) -> String {
        format!("{}Result", self.type_name(query))
    }

    /// Whether a raw column name has an override.
    pub fn is_renamed(&self, raw: &str) -> bool {
        self.renames.get(raw).is_some_and(|name| !name.is_empty())
    }
}
