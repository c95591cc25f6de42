use anyhow::Result;
use clap::Parser;

use crate::installer::Installer;
use unlocker_installer::Action;

// CLI arguments parsing structure
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Action to perform: install, uninstall, or update (case-insensitive)
    pub action: String,
}

// Execute the selected action
pub fn execute_command(cli: &Cli) -> Result<()> {
    // Reject unknown actions before touching the filesystem or network
    let action: Action = cli.action.parse()?;

    println!(
        "info: unlocker installer {}, action: {action}",
        env!("CARGO_PKG_VERSION")
    );

    let installer = Installer::new()?;
    installer.run(action)
}
