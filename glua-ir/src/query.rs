//! Parsed query descriptors.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Column, Extra};

/// A parsed query with resolved parameters and result columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    pub text: String,
    pub name: String,
    /// Raw command annotation, e.g. `:one`.
    pub cmd: String,
    pub columns: Vec<Column>,
    pub params: Vec<Parameter>,
    pub comments: Vec<String>,
    /// Source file the query was declared in.
    pub filename: String,
    /// Fields this crate does not model, kept for the request dump.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Query {
    /// Parse the command annotation.
    pub fn command(&self) -> Result<CommandKind, String> {
        self.cmd.parse()
    }
}

/// A positional query parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub number: i32,
    pub column: Column,
    #[serde(flatten)]
    pub extra: Extra,
}

/// What a query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    /// `:exec` - no result.
    Exec,
    /// `:one` - a single row.
    One,
    /// `:many` - a sequence of rows.
    Many,
}

impl CommandKind {
    /// Returns the sqlc annotation for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Exec => ":exec",
            CommandKind::One => ":one",
            CommandKind::Many => ":many",
        }
    }

    /// Whether the command produces rows.
    pub fn returns_rows(&self) -> bool {
        !matches!(self, CommandKind::Exec)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CommandKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ":exec" => Ok(CommandKind::Exec),
            ":one" => Ok(CommandKind::One),
            ":many" => Ok(CommandKind::Many),
            _ => Err(format!(
                "unsupported query command '{}', expected ':exec', ':one' or ':many'",
                s
            )),
        }
    }
}
