use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use glua_options::Options;

use super::UnwrapOrExit;
use crate::{
    input::read_request,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the JSON generate request (`-` reads stdin)
    #[arg(short, long, default_value = "-")]
    pub request: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let request = read_request(&self.request)?;
        let options = Options::from_request(&request).unwrap_or_exit();

        let report = ops::check(request, options, &self.request)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
