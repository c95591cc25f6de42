use anyhow::{anyhow, bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use unlocker_installer::{parse_tool_version, Platform};

// Constants
const VMWARE_BINARY: &str = "vmware";
const LINUX_VMWARE_PATH: &str = "/usr/bin/vmware";

// Locate the VMware Workstation executable for the current platform
pub fn locate_vmware(platform: Platform) -> Result<PathBuf> {
    match platform {
        Platform::Linux => {
            if let Ok(path) = which::which(VMWARE_BINARY) {
                return Ok(path);
            }
            let fallback = Path::new(LINUX_VMWARE_PATH);
            if fallback.exists() {
                return Ok(fallback.to_path_buf());
            }
            Err(anyhow!(
                "VMware Workstation not found: install it before running the unlocker"
            ))
        }
        Platform::Windows => {
            let base = env::var_os("ProgramFiles(x86)").ok_or_else(|| {
                anyhow!("the ProgramFiles(x86) environment variable is not set")
            })?;
            let path = PathBuf::from(base)
                .join("VMware")
                .join("VMware Workstation")
                .join("vmware.exe");
            if path.exists() {
                Ok(path)
            } else {
                Err(anyhow!(
                    "VMware Workstation not found at '{}': install it first",
                    path.display()
                ))
            }
        }
    }
}

/// Run the product with its version flag and extract the version string
///
/// # Errors
///
/// Returns an error if the executable cannot be spawned. An output that
/// contains no version-shaped substring yields `Ok(None)`.
pub fn query_vmware_version(vmware: &Path) -> Result<Option<String>> {
    let output = Command::new(vmware)
        .arg("-v")
        .output()
        .with_context(|| format!("failed to run '{} -v'", vmware.display()))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_tool_version(&stdout))
}

// Run the platform script and fail on a non-zero exit. Child output
// streams straight to the console.
pub fn execute_script(platform: Platform, script: &Path) -> Result<()> {
    let mut command = match platform {
        Platform::Linux => {
            make_executable(script);
            if is_root() {
                Command::new(script)
            } else {
                println!("info: elevated privileges are required for this action");
                let mut cmd = Command::new("sudo");
                cmd.arg(script);
                cmd
            }
        }
        Platform::Windows => {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(script);
            cmd
        }
    };

    println!("running '{}'", script.display());
    run_checked(&mut command)
}

// Best-effort chmod +x; failure is a warning, not fatal
fn make_executable(script: &Path) {
    #[cfg(unix)]
    {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let result = fs::metadata(script).and_then(|metadata| {
            let mut perms = metadata.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(script, perms)
        });

        if let Err(e) = result {
            eprintln!(
                "warning: failed to mark '{}' executable: {e}",
                script.display()
            );
        }
    }
    #[cfg(not(unix))]
    {
        let _ = script;
    }
}

fn is_root() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::geteuid() == 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}

// Wait for the child and turn a non-zero exit into an error
fn run_checked(command: &mut Command) -> Result<()> {
    let status = command
        .status()
        .with_context(|| format!("failed to execute {command:?}"))?;

    if !status.success() {
        bail!("the command failed ({status}): check permissions or script errors");
    }
    Ok(())
}
