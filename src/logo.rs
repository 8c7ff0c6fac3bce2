use crate::platform::Platform;

/// ASCII art tables, one row per entry. Read-only process-wide data;
/// the renderer indexes them positionally and never mutates them.
pub const DARWIN: &[&str] = &[
    "                    'c.",
    "                 ,xNMM.",
    "               .OMMMMo",
    "               OMMM0,",
    "     .;loddo:' loolloddol;.",
    "   cKMMMMMMMMMMNWMMMMMMMMMM0:",
    " .KMMMMMMMMMMMMMMMMMMMMMMMWd.",
    " XMMMMMMMMMMMMMMMMMMMMMMMX.",
    ";MMMMMMMMMMMMMMMMMMMMMMMM:",
    ":MMMMMMMMMMMMMMMMMMMMMMMM:",
    ".MMMMMMMMMMMMMMMMMMMMMMMMX.",
    " kMMMMMMMMMMMMMMMMMMMMMMMMWd.",
    " .XMMMMMMMMMMMMMMMMMMMMMMMMMMk",
    "  .XMMMMMMMMMMMMMMMMMMMMMMMMK.",
    "    kMMMMMMMMMMMMMMMMMMMMMMd",
    "     ;KMMMMMMMWXXWMMMMMMMk.",
    "       .cooc,.    .,coo:.",
];

pub const LINUX: &[&str] = &[
    "░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░",
    "░░▒▓█▓▒░░░░░░░░▓▒░░░░░░░░░░░░░░░░░░░░░░░",
    "░░░▒█▒░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░",
    "░░░▒█▒░░░░░░▒▓▒░▒▓▓░▒▓▓▓░░░▒▓▒░▒▓▓░▒▓▒░░",
    "░░░▒█▒░░░░░░░█▓░░░▓█▒░░▓█░░░░█▓░░▓█▒░░░░",
    "░░░▒█▒░░░░░░░█▓░░░▓█░░░░█▓░░░█▓░░░▒█▓░░░",
    "░░░▒█▒░░░▓▒░░█▓░░░▓█░░░░█▓░░░█▓░░▒▓░▓█░░",
    "░░▒▓▓▓▒▒▒▓▓░▒▓▓▒░▒▓▓▒░░▒▓▓▒░▒▓▓▒▒▓▒░▒▓▓░",
];

pub const WIN32: &[&str] = &[
    "                    ....,,:;+ccllll",
    "      ...,,+:;  cllllllllllllllllll",
    ",cclllllllllll  lllllllllllllllllll",
    "llllllllllllll  lllllllllllllllllll",
    "llllllllllllll  lllllllllllllllllll",
    "llllllllllllll  lllllllllllllllllll",
    "llllllllllllll  lllllllllllllllllll",
    "",
    "llllllllllllll  lllllllllllllllllll",
    "llllllllllllll  lllllllllllllllllll",
    "llllllllllllll  lllllllllllllllllll",
    "llllllllllllll  lllllllllllllllllll",
    "llllllllllllll  lllllllllllllllllll",
    "`'ccllllllllll  lllllllllllllllllll",
    "      `' \\*::  :ccllllllllllllllll",
    "                    ````''*::cll",
];

/// Fallback for platforms without art of their own.
pub const PLACEHOLDER: &[&str] = &[":::OS LOGO:::"];

pub fn lines(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Darwin => DARWIN,
        Platform::Linux => LINUX,
        Platform::Win32 => WIN32,
        Platform::Unsupported => PLACEHOLDER,
    }
}
