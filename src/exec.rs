use std::process::Command;
use which::which;

/// Run an external command and capture its stdout.
///
/// Any failure, a missing binary, a spawn error, or a non-zero exit,
/// yields `None`; collectors fail closed to their sentinel instead of
/// aborting the whole report over one broken utility.
pub fn capture(program: &str, args: &[&str]) -> Option<String> {
    which(program).ok()?;
    let out = Command::new(program).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&out.stdout).into_owned())
}
