//! Options parsing from JSON text and request blobs.

use std::str::FromStr;

use glua_ir::GenerateRequest;

use crate::{Error, Options, Result, SourceContext, validate::validate_options};

impl FromStr for Options {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_options(s, "options")
    }
}

impl Options {
    /// Parse the options blob carried by a generate request.
    ///
    /// A request without an options block is a configuration error because
    /// `global_lua_table` is required.
    pub fn from_request(request: &GenerateRequest) -> Result<Self> {
        let value = request.options().ok_or_else(|| Box::new(Error::MissingOptions))?;
        Self::from_value(value)
    }

    /// Parse options from an already decoded JSON value.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        // Re-render so diagnostics can point into readable source text.
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| SourceContext::new(String::new(), "options").parse_error(e))?;
        parse_options(&content, "options")
    }
}

/// Parse options from content with the given name for error reporting.
pub fn parse_options(content: &str, filename: &str) -> Result<Options> {
    let source_ctx = SourceContext::new(content, filename);
    let options: Options =
        serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_options(&options, &source_ctx)?;
    for key in options.unknown.keys() {
        tracing::warn!(option = %key, "ignoring unknown option");
    }
    Ok(options)
}
