use thiserror::Error;

/// Errors raised while synthesizing models and bindings.
///
/// Failures inside a table or query are wrapped in [`CodegenError::Table`] or
/// [`CodegenError::Query`] so the report names the failing item, with the
/// underlying cause available through the error source chain.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("generate request has no catalog")]
    MissingCatalog,

    #[error("unsupported column type '{sql_type}'")]
    UnsupportedType { sql_type: String },

    #[error("query text is empty")]
    EmptyQuery,

    #[error("unsupported query command '{cmd}'")]
    UnknownCommand { cmd: String },

    #[error("failed to synthesize model for table '{table}'")]
    Table {
        table: String,
        #[source]
        source: Box<CodegenError>,
    },

    #[error("failed to synthesize binding for query '{query}'")]
    Query {
        query: String,
        #[source]
        source: Box<CodegenError>,
    },
}

impl CodegenError {
    /// Attribute this error to a catalog table.
    pub fn in_table(self, table: impl Into<String>) -> Self {
        Self::Table {
            table: table.into(),
            source: Box::new(self),
        }
    }

    /// Attribute this error to a query.
    pub fn in_query(self, query: impl Into<String>) -> Self {
        Self::Query {
            query: query.into(),
            source: Box::new(self),
        }
    }

    /// The innermost cause, skipping table and query context.
    pub fn root_cause(&self) -> &CodegenError {
        match self {
            Self::Table { source, .. } | Self::Query { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
