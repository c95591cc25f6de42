use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::download::{fetch_tools_iso, TOOLS_DIR};
use crate::system::{execute_script, locate_vmware, query_vmware_version};
use unlocker_installer::{version_is_untested, Action, Platform, TESTED_MAJOR_VERSION};

// Installer runs the prerequisite checks and drives one action end to end
pub struct Installer {
    platform: Platform,
    script_dir: PathBuf,
}

impl Installer {
    // Validate the platform and locate the directory holding the
    // platform scripts (alongside this executable)
    pub fn new() -> Result<Self> {
        let platform = Platform::detect()?;
        let script_dir = script_dir().context("failed to determine installer location")?;

        Ok(Self {
            platform,
            script_dir,
        })
    }

    // The full linear sequence; every step is a potential early exit
    pub fn run(&self, action: Action) -> Result<()> {
        let vmware = locate_vmware(self.platform)?;
        println!("info: VMware Workstation detected at '{}'", vmware.display());

        self.report_version(&vmware)?;

        // install and update need darwin.iso on disk before dispatch
        if action.needs_tools() {
            fetch_tools_iso(Path::new(TOOLS_DIR))
                .context("failed to prepare the VMware tools image")?;
        }

        let script = resolve_script(&self.script_dir, self.platform, action)?;
        execute_script(self.platform, &script)?;

        println!("operation completed successfully");
        Ok(())
    }

    // Print the detected product version; warn (without aborting) when it
    // is newer than anything the unlocker was tested on. An unknown
    // version prints nothing and falls through to dispatch.
    fn report_version(&self, vmware: &Path) -> Result<()> {
        if let Some(version) = query_vmware_version(vmware)? {
            println!("info: detected VMware Workstation version {version}");
            if version_is_untested(&version) {
                println!(
                    "warning: this unlocker has not been tested on VMware Workstation \
                     releases newer than {TESTED_MAJOR_VERSION}.x"
                );
            }
        }
        Ok(())
    }
}

// Resolve the platform script for an action and require that it exists
fn resolve_script(script_dir: &Path, platform: Platform, action: Action) -> Result<PathBuf> {
    let script = script_dir.join(platform.script_name(action));
    if !script.exists() {
        bail!("script not found: {}", script.display());
    }
    Ok(script)
}

// Directory holding this executable, where the platform scripts live
fn script_dir() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    Ok(exe
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::resolve_script;
    use std::fs;
    use unlocker_installer::{Action, Platform};

    #[test]
    fn missing_script_aborts_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();

        let err = resolve_script(dir.path(), Platform::Linux, Action::Install).unwrap_err();
        let expected = dir.path().join("lnx-install.sh");
        assert!(err.to_string().contains(&expected.display().to_string()));
    }

    #[test]
    fn present_script_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("win-update-tools.cmd");
        fs::write(&script, "@echo off\r\n").unwrap();

        let resolved = resolve_script(dir.path(), Platform::Windows, Action::Update).unwrap();
        assert_eq!(resolved, script);
    }
}
