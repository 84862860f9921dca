use eyre::{Result, WrapErr};
use glua_ir::GenerateRequest;

/// `request.json`: the full generate request, pretty-printed for inspection.
pub struct RequestJson<'a> {
    request: &'a GenerateRequest,
}

impl<'a> RequestJson<'a> {
    pub fn new(request: &'a GenerateRequest) -> Self {
        Self { request }
    }

    pub fn path(&self) -> String {
        "request.json".to_string()
    }

    pub fn render(&self) -> Result<String> {
        serde_json::to_string_pretty(self.request).wrap_err("failed to serialize generate request")
    }
}
