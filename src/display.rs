use regex::Regex;

use crate::exec;
use crate::platform::Platform;

/// Screen resolution as `WIDTHxHEIGHT`, or `None` when no display
/// utility is available or its output has an unexpected shape.
pub fn query(platform: Platform) -> Option<String> {
    match platform {
        Platform::Darwin => {
            let profile = exec::capture("system_profiler", &["SPDisplaysDataType"])?;
            parse_profiler(&profile)
        }
        Platform::Linux => linux_resolution(),
        Platform::Win32 => windows_resolution(),
        Platform::Unsupported => None,
    }
}

/// `system_profiler SPDisplaysDataType` emits a line like
/// `          Resolution: 2560 x 1600 Retina`.
fn parse_profiler(output: &str) -> Option<String> {
    let re = Regex::new(r"Resolution:\s*(\d+)\s*x\s*(\d+)").ok()?;
    let caps = re.captures(output)?;
    Some(format!("{}x{}", &caps[1], &caps[2]))
}

fn linux_resolution() -> Option<String> {
    if let Some(out) = exec::capture("xrandr", &["--current"]) {
        if let Some(res) = parse_xrandr(&out) {
            return Some(res);
        }
    }
    parse_xdpyinfo(&exec::capture("xdpyinfo", &[])?)
}

/// `xrandr --current` header: `Screen 0: ... current 2560 x 1440, ...`.
fn parse_xrandr(output: &str) -> Option<String> {
    let re = Regex::new(r"current\s+(\d+)\s*x\s*(\d+)").ok()?;
    let caps = re.captures(output)?;
    Some(format!("{}x{}", &caps[1], &caps[2]))
}

/// `xdpyinfo` reports `  dimensions:    2560x1440 pixels ...`.
fn parse_xdpyinfo(output: &str) -> Option<String> {
    let re = Regex::new(r"dimensions:\s*(\d+)x(\d+)").ok()?;
    let caps = re.captures(output)?;
    Some(format!("{}x{}", &caps[1], &caps[2]))
}

fn windows_resolution() -> Option<String> {
    let width = parse_wmic_number(&exec::capture(
        "wmic",
        &["desktopmonitor", "get", "screenwidth"],
    )?)?;
    let height = parse_wmic_number(&exec::capture(
        "wmic",
        &["desktopmonitor", "get", "screenheight"],
    )?)?;
    Some(format!("{}x{}", width, height))
}

/// wmic prints a header row, then the value; blank rows in between.
fn parse_wmic_number(output: &str) -> Option<String> {
    output
        .lines()
        .skip(1)
        .map(str::trim)
        .find(|line| !line.is_empty() && line.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profiler() {
        let output = "Graphics/Displays:\n\
                          Apple M1:\n\
                            Displays:\n\
                              Color LCD:\n\
                                Resolution: 2560 x 1600 Retina\n";
        assert_eq!(parse_profiler(output), Some("2560x1600".to_string()));
    }

    #[test]
    fn test_parse_profiler_rejects_garbage() {
        assert_eq!(parse_profiler("no displays detected"), None);
        assert_eq!(parse_profiler(""), None);
    }

    #[test]
    fn test_parse_xrandr() {
        let output = "Screen 0: minimum 320 x 200, current 2560 x 1440, maximum 16384 x 16384\n\
                      DP-1 connected primary 2560x1440+0+0\n";
        assert_eq!(parse_xrandr(output), Some("2560x1440".to_string()));
    }

    #[test]
    fn test_parse_xdpyinfo() {
        let output = "screen #0:\n  dimensions:    1920x1080 pixels (508x285 millimeters)\n";
        assert_eq!(parse_xdpyinfo(output), Some("1920x1080".to_string()));
    }

    #[test]
    fn test_parse_wmic_number() {
        let output = "ScreenWidth  \r\n\r\n1920         \r\n\r\n";
        assert_eq!(parse_wmic_number(output), Some("1920".to_string()));
    }

    #[test]
    fn test_parse_wmic_number_no_monitor() {
        assert_eq!(parse_wmic_number("ScreenWidth  \r\n\r\n"), None);
    }

    #[test]
    fn test_unsupported_platform_is_none() {
        assert_eq!(query(Platform::Unsupported), None);
    }
}
