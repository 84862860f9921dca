//! Deterministic grouping of bindings by source file.

use indexmap::IndexMap;

use crate::synthesis::QueryBinding;

/// Query bindings grouped by the file they were declared in.
///
/// Groups keep the order in which filenames are first encountered, and
/// bindings keep their request order within a group, so reruns on the same
/// request always produce the same artifact order.
#[derive(Debug, Default)]
pub struct QueryFileGroups<'a> {
    groups: IndexMap<&'a str, Vec<&'a QueryBinding>>,
}

impl<'a> QueryFileGroups<'a> {
    pub fn new(bindings: &'a [QueryBinding]) -> Self {
        let mut groups: IndexMap<&'a str, Vec<&'a QueryBinding>> = IndexMap::new();
        for binding in bindings {
            groups
                .entry(binding.filename.as_str())
                .or_default()
                .push(binding);
        }
        Self { groups }
    }

    /// Iterate over `(filename, bindings)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a QueryBinding])> {
        self.groups.iter().map(|(name, group)| (*name, group.as_slice()))
    }

    /// Source filenames in first-seen order.
    pub fn filenames(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glua_ir::CommandKind;

    use super::*;
    use crate::synthesis::ReturnShape;

    fn binding(name: &str, filename: &str) -> QueryBinding {
        QueryBinding {
            name: name.into(),
            filename: filename.into(),
            sql: "SELECT 1".into(),
            command: CommandKind::Exec,
            params: Vec::new(),
            params_type: None,
            result_type: None,
            returns: ReturnShape::Nothing,
            renames: None,
        }
    }

    #[test]
    fn test_first_seen_order() {
        let bindings = vec![
            binding("ListPosts", "posts.sql"),
            binding("GetUser", "users.sql"),
            binding("GetPost", "posts.sql"),
            binding("Audit", "audit.sql"),
        ];

        let groups = QueryFileGroups::new(&bindings);

        let files: Vec<_> = groups.filenames().collect();
        assert_eq!(files, vec!["posts.sql", "users.sql", "audit.sql"]);

        let (_, posts) = groups.iter().next().unwrap();
        let names: Vec<_> = posts.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["ListPosts", "GetPost"]);
    }

    #[test]
    fn test_empty() {
        let groups = QueryFileGroups::new(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
    }
}
