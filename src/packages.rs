use std::fs;

use crate::exec;
use crate::platform::Platform;

pub const NOT_SUPPORTED: &str = "not supported";
const DISTRO_NOT_SUPPORTED: &str = "distribution not supported";

/// Installed package count as a display string. Platforms without a
/// package-manager integration get a sentinel, never an error.
pub fn query(platform: Platform) -> String {
    match platform {
        Platform::Darwin => brew_count().unwrap_or_else(|| NOT_SUPPORTED.to_string()),
        Platform::Linux => apt_count().unwrap_or_else(|| DISTRO_NOT_SUPPORTED.to_string()),
        Platform::Win32 | Platform::Unsupported => NOT_SUPPORTED.to_string(),
    }
}

/// Homebrew: one Cellar directory entry per installed formula.
fn brew_count() -> Option<String> {
    let cellar = exec::capture("brew", &["--cellar"])?;
    let entries = fs::read_dir(cellar.trim()).ok()?;
    Some(entries.count().to_string())
}

fn apt_count() -> Option<String> {
    let listing = exec::capture("apt", &["list", "--installed"])?;
    Some(count_installed(&listing).to_string())
}

/// Package rows in `apt list --installed` output; the first line is the
/// "Listing..." header.
fn count_installed(output: &str) -> usize {
    output.lines().count().saturating_sub(1)
}
