use crate::packages::NOT_SUPPORTED;
use crate::platform::Platform;

/// The user's login shell as a display string.
pub fn query(platform: Platform) -> String {
    match platform {
        Platform::Darwin | Platform::Linux => {
            unix_shell().unwrap_or_else(|| NOT_SUPPORTED.to_string())
        }
        Platform::Win32 => windows_shell(),
        Platform::Unsupported => NOT_SUPPORTED.to_string(),
    }
}

#[cfg(unix)]
fn unix_shell() -> Option<String> {
    passwd_shell().or_else(|| std::env::var("SHELL").ok())
}

#[cfg(not(unix))]
fn unix_shell() -> Option<String> {
    std::env::var("SHELL").ok()
}

/// Login shell from the passwd entry of the effective user. More
/// reliable than `$SHELL`, which a parent process may have rewritten.
#[cfg(unix)]
fn passwd_shell() -> Option<String> {
    use std::ffi::CStr;

    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut buf = vec![0 as libc::c_char; 2048];
    let mut result: *mut libc::passwd = std::ptr::null_mut();

    let rc = unsafe {
        libc::getpwuid_r(
            libc::geteuid(),
            &mut pwd,
            buf.as_mut_ptr(),
            buf.len(),
            &mut result,
        )
    };
    if rc != 0 || result.is_null() || pwd.pw_shell.is_null() {
        return None;
    }

    let shell = unsafe { CStr::from_ptr(pwd.pw_shell) }.to_str().ok()?;
    if shell.is_empty() {
        None
    } else {
        Some(shell.to_string())
    }
}

/// PSModulePath is populated by every PowerShell host; a bare CMD
/// session has no comparable marker.
fn windows_shell() -> String {
    if std::env::var("PSModulePath").is_ok() {
        "Powershell".to_string()
    } else {
        "CMD".to_string()
    }
}
