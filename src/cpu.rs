use std::fs;

use crate::exec;
use crate::platform::Platform;

/// CPU brand string, or `None` where the platform has no lookup.
pub fn query(platform: Platform) -> Option<String> {
    match platform {
        Platform::Darwin => exec::capture("sysctl", &["-n", "machdep.cpu.brand_string"])
            .map(|out| out.trim().to_string())
            .filter(|brand| !brand.is_empty()),
        Platform::Linux => {
            let cpuinfo = fs::read_to_string("/proc/cpuinfo").ok()?;
            parse_model_name(&cpuinfo)
        }
        // No Windows lookup; permanently reported as unsupported.
        Platform::Win32 | Platform::Unsupported => None,
    }
}

fn parse_model_name(cpuinfo: &str) -> Option<String> {
    cpuinfo
        .lines()
        .find(|line| line.starts_with("model name"))
        .and_then(|line| line.split(':').nth(1))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
