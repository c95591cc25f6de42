use anyhow::{anyhow, Error};
use regex::Regex;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

// Highest VMware Workstation major version the unlocker has been tested on
pub const TESTED_MAJOR_VERSION: u32 = 15;

// Requested installer action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Uninstall,
    Update,
}

impl Action {
    // Install and update both need the darwin.iso support asset
    #[must_use]
    pub fn needs_tools(self) -> bool {
        matches!(self, Self::Install | Self::Update)
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "install" => Ok(Self::Install),
            "uninstall" => Ok(Self::Uninstall),
            "update" => Ok(Self::Update),
            other => Err(anyhow!(
                "unknown action '{other}': use install, uninstall, or update"
            )),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Install => "install",
            Self::Uninstall => "uninstall",
            Self::Update => "update",
        };
        write!(f, "{name}")
    }
}

// Supported host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
}

impl Platform {
    /// Detect the host operating system
    ///
    /// # Errors
    ///
    /// Returns an error if the host is neither Linux nor Windows.
    pub fn detect() -> Result<Self, Error> {
        match env::consts::OS {
            "linux" => Ok(Self::Linux),
            "windows" => Ok(Self::Windows),
            other => Err(anyhow!("unsupported operating system: {other}")),
        }
    }

    // Platform-specific script filename for each action; the match is
    // total, so an invalid (platform, action) pair cannot be expressed
    #[must_use]
    pub fn script_name(self, action: Action) -> &'static str {
        match (self, action) {
            (Self::Linux, Action::Install) => "lnx-install.sh",
            (Self::Linux, Action::Uninstall) => "lnx-uninstall.sh",
            (Self::Linux, Action::Update) => "lnx-update-tools.sh",
            (Self::Windows, Action::Install) => "win-install.cmd",
            (Self::Windows, Action::Uninstall) => "win-uninstall.cmd",
            (Self::Windows, Action::Update) => "win-update-tools.cmd",
        }
    }
}

// Compiled once; the pattern is a literal and cannot fail to compile
fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+\.\d+(?:\.\d+)?").expect("valid version pattern"))
}

// Extract the first version-shaped substring from the product's -v output
#[must_use]
pub fn parse_tool_version(output: &str) -> Option<String> {
    version_pattern()
        .find(output)
        .map(|m| m.as_str().to_string())
}

// Whether a detected version is newer than anything the unlocker was
// tested against; advisory only, never blocks execution
#[must_use]
pub fn version_is_untested(version: &str) -> bool {
    version
        .split('.')
        .next()
        .and_then(|major| major.parse::<u32>().ok())
        .is_some_and(|major| major > TESTED_MAJOR_VERSION)
}
