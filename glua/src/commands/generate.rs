use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use glua_options::Options;

use super::UnwrapOrExit;
use crate::{
    input::read_request,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the JSON generate request (`-` reads stdin)
    #[arg(short, long, default_value = "-")]
    pub request: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write pipeline phase snapshots to <output>/.glua/debug
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let request = read_request(&self.request)?;
        let options = Options::from_request(&request).unwrap_or_exit();

        let report = ops::generate(
            request,
            options,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
