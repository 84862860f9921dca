//! Top-level generate request.

use serde::{Deserialize, Serialize};

use crate::{Catalog, Extra, Query};

/// A single code generation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    pub settings: Settings,
    /// Schema catalog; `None` when the request carries no schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Catalog>,
    pub queries: Vec<Query>,
    pub sqlc_version: String,
    /// Fields this crate does not model, kept for the request dump.
    #[serde(flatten)]
    pub extra: Extra,
}

impl GenerateRequest {
    /// Parse a request from its JSON representation.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// The plugin options blob, if the request carries one.
    pub fn options(&self) -> Option<&serde_json::Value> {
        self.settings.codegen.options.as_ref()
    }
}

/// Project settings forwarded by sqlc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub version: String,
    pub engine: String,
    pub schema: Vec<String>,
    pub queries: Vec<String>,
    pub codegen: Codegen,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Codegen block of the project settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Codegen {
    pub out: String,
    pub plugin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: Extra,
}
