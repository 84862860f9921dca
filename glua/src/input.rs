//! Loading generate requests.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use eyre::{Result, WrapErr};
use glua_ir::GenerateRequest;

/// Read a JSON generate request from a file, or from stdin when `path` is `-`.
pub fn read_request(path: &Path) -> Result<GenerateRequest> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("failed to read generate request from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?
    };

    GenerateRequest::from_json(&content)
        .wrap_err_with(|| format!("failed to parse generate request {}", path.display()))
}
