use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

// Constants
pub const TOOLS_DIR: &str = "tools";
const ISO_NAME: &str = "darwin.iso";
const DARWIN_ISO_URL: &str =
    "https://github.com/your-repo/macOS-VMware-Tools/raw/main/darwin.iso";

/// Ensure the tools directory holds darwin.iso, downloading it on first use
///
/// An already-present image is reused as-is: no freshness check and no
/// checksum verification.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the download
/// fails; a download failure aborts the whole run, there is no retry.
pub fn fetch_tools_iso(tools_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(tools_dir).with_context(|| {
        format!("failed to create tools directory '{}'", tools_dir.display())
    })?;

    let iso_path = tools_dir.join(ISO_NAME);
    if iso_path.exists() {
        println!("info: darwin.iso already exists: {}", iso_path.display());
        return Ok(iso_path);
    }

    println!("downloading darwin.iso from {DARWIN_ISO_URL} ...");
    let mut response = reqwest::blocking::get(DARWIN_ISO_URL)
        .and_then(reqwest::blocking::Response::error_for_status)
        .context("failed to download darwin.iso")?;

    let mut file = File::create(&iso_path)
        .with_context(|| format!("failed to create '{}'", iso_path.display()))?;

    // Drop a truncated file so the next run does not treat it as cached
    if let Err(e) = response.copy_to(&mut file) {
        let _ = fs::remove_file(&iso_path);
        return Err(anyhow::Error::new(e).context("failed to write darwin.iso"));
    }

    println!("download complete: {}", iso_path.display());
    Ok(iso_path)
}
