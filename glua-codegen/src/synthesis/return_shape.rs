//! Result shape resolution and table-type reuse detection.

use std::collections::HashMap;

use glua_ir::{Catalog, Column, CommandKind, Identifier, Table};
use tracing::debug;

use super::{ReturnShape, TypeRef};
use crate::NameTranslator;

/// Catalog tables indexed once per request.
///
/// Unqualified lookups return the first table with that name in catalog
/// order. Lookups that carry a schema prefer the exact `(schema, name)` match.
#[derive(Debug, Default)]
pub struct TableIndex<'a> {
    by_name: HashMap<&'a str, &'a Table>,
    by_qualified: HashMap<(&'a str, &'a str), &'a Table>,
}

impl<'a> TableIndex<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let mut index = Self::default();
        for (schema, table) in catalog.tables() {
            // Bare names resolve to the first table in catalog order. A later
            // schema never shadows an earlier one.
            index.by_name.entry(table.name()).or_insert(table);
            index
                .by_qualified
                .entry((schema.name.as_str(), table.name()))
                .or_insert(table);
        }
        index
    }

    /// Find the table an identifier refers to.
    pub fn lookup(&self, rel: &Identifier) -> Option<&'a Table> {
        if !rel.schema.is_empty()
            && let Some(table) = self.by_qualified.get(&(rel.schema.as_str(), rel.name.as_str()))
        {
            return Some(*table);
        }
        self.by_name.get(rel.name.as_str()).copied()
    }

    /// Number of distinct table names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Decides what a query returns and whether it can alias a table model.
#[derive(Debug, Clone, Copy)]
pub struct ReturnShapeResolver<'i, 'a> {
    index: &'i TableIndex<'a>,
}

impl<'i, 'a> ReturnShapeResolver<'i, 'a> {
    pub fn new(index: &'i TableIndex<'a>) -> Self {
        Self { index }
    }

    /// The catalog table whose column sequence the result columns reproduce.
    ///
    /// Every column must come from the same table, and the table's columns
    /// must match in count, order, name and declared type.
    pub fn reusable_table(&self, columns: &[Column]) -> Option<&'a Table> {
        let owner = columns.first()?.table.as_ref()?;
        if owner.name.is_empty() {
            return None;
        }
        if !columns
            .iter()
            .all(|c| c.table_name() == Some(owner.name.as_str()))
        {
            return None;
        }

        let table = self.index.lookup(owner)?;
        let matches = table.columns.len() == columns.len()
            && table
                .columns
                .iter()
                .zip(columns)
                .all(|(t, q)| t.name == q.name && t.type_name() == q.type_name());

        matches.then_some(table)
    }

    /// Resolve the return shape of a query.
    pub fn resolve(
        &self,
        query_name: &str,
        command: CommandKind,
        columns: &[Column],
        names: &NameTranslator<'_>,
    ) -> ReturnShape {
        if !command.returns_rows() {
            return ReturnShape::Nothing;
        }

        let type_ref = match self.reusable_table(columns) {
            Some(table) => {
                debug!(query = query_name, table = table.name(), "reusing table type");
                TypeRef::reused(names.type_name(table.name()))
            }
            None => TypeRef::synthesized(names.result_type_name(query_name)),
        };

        match command {
            CommandKind::Many => ReturnShape::Sequence(type_ref),
            _ => ReturnShape::Single(type_ref),
        }
    }
}
