use std::env;

/// Closed set of platforms the metric collectors dispatch over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Darwin,
    Linux,
    Win32,
    Unsupported,
}

impl Platform {
    /// Detect the platform the process is running on.
    pub fn current() -> Platform {
        match env::consts::OS {
            "macos" => Platform::Darwin,
            "linux" => Platform::Linux,
            "windows" => Platform::Win32,
            _ => Platform::Unsupported,
        }
    }

    /// Presentation name, printed verbatim in the OS line.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
            Platform::Win32 => "win32",
            Platform::Unsupported => "unsupported",
        }
    }
}
