use regex::Regex;

use crate::exec;
use crate::platform::Platform;

/// Graphics adapter name, or `None` when none can be determined.
pub fn query(platform: Platform) -> Option<String> {
    match platform {
        Platform::Darwin => {
            let profile = exec::capture("system_profiler", &["SPDisplaysDataType"])?;
            parse_chipset(&profile)
        }
        Platform::Linux => parse_lspci(&exec::capture("lspci", &[])?),
        Platform::Win32 => {
            let names = exec::capture("wmic", &["path", "win32_videoController", "get", "name"])?;
            parse_wmic_name(&names)
        }
        Platform::Unsupported => None,
    }
}

/// `system_profiler SPDisplaysDataType` names the adapter as
/// `      Chipset Model: Apple M1`.
fn parse_chipset(output: &str) -> Option<String> {
    let re = Regex::new(r"Chipset Model:\s*(.+)").ok()?;
    let caps = re.captures(output)?;
    Some(caps[1].trim().to_string())
}

/// First VGA or 3D controller row of `lspci`, device name after the
/// class column.
fn parse_lspci(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains("VGA compatible controller") || line.contains("3D controller"))
        .and_then(|line| line.splitn(3, ':').nth(2))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

/// wmic prints a `Name` header row, then one row per adapter.
fn parse_wmic_name(output: &str) -> Option<String> {
    output
        .lines()
        .skip(1)
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
