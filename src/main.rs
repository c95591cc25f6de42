use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::process::exit;

mod cli;
mod download;
mod installer;
mod system;

use cli::{execute_command, Cli};

fn main() -> Result<()> {
    // Parse command line arguments; a missing or malformed action exits
    // with status 1 rather than clap's default 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            exit(code);
        }
    };

    // Execute the requested action
    execute_command(&cli).with_context(|| "installer failed")
}
