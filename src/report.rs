use std::env;

use colored::Colorize;
use sysinfo::System;

use crate::color::{SUPPORTED, Scheme};
use crate::platform::Platform;
use crate::{cpu, display, gpu, logo, memory, packages, render, shell, uptime};

use crate::packages::NOT_SUPPORTED;

const SEPARATOR: &str = "-----------------";

#[derive(Debug)]
enum Action {
    Run(Scheme),
    ShowHelp,
    ShowVersion,
}

/// Execute the sysfetch command.
/// Returns exit code: 0 for success, non-zero for errors.
pub fn execute(args: &[String]) -> i32 {
    match parse_arguments(args) {
        Ok(Action::Run(scheme)) => run(scheme),
        Ok(Action::ShowHelp) => {
            show_help();
            0
        }
        Ok(Action::ShowVersion) => {
            println!("sysfetch {}", env!("CARGO_PKG_VERSION"));
            0
        }
        Err(e) => {
            eprintln!("{}", e.red());
            1
        }
    }
}

/// Parse command line arguments: at most one positional color token.
fn parse_arguments(args: &[String]) -> Result<Action, String> {
    let mut color_token: Option<&str> = None;

    for arg in args {
        match arg.as_str() {
            "--help" => return Ok(Action::ShowHelp),
            "--version" => return Ok(Action::ShowVersion),
            arg if arg.starts_with('-') => {
                return Err(format!("sysfetch: invalid option -- '{}'", arg));
            }
            arg => {
                if color_token.is_some() {
                    return Err(format!("sysfetch: extra operand '{}'", arg));
                }
                color_token = Some(arg);
            }
        }
    }

    let scheme = Scheme::parse(color_token)?;
    Ok(Action::Run(scheme))
}

fn run(scheme: Scheme) -> i32 {
    let platform = Platform::current();

    let info = info_lines(platform);
    let painted: Vec<String> = info
        .iter()
        .enumerate()
        .map(|(index, line)| scheme.paint(index, line))
        .collect();
    let art: Vec<String> = logo::lines(platform)
        .iter()
        .map(|line| scheme.paint_logo(line))
        .collect();

    match render::render(&art, &painted) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", format!("sysfetch: write error: {}", e).red());
            1
        }
    }
}

/// Info lines in fixed presentation order: user@host, separator, OS,
/// kernel, uptime, packages, shell, resolution, CPU, GPU, memory.
/// Metrics are collected synchronously, in this order.
fn info_lines(platform: Platform) -> Vec<String> {
    let host = System::host_name().unwrap_or_else(|| "unknown".to_string());
    let os_release = System::os_version().unwrap_or_default();
    let kernel = System::kernel_version().unwrap_or_else(|| NOT_SUPPORTED.to_string());

    vec![
        format!("{}@{}", username(), host),
        SEPARATOR.to_string(),
        format!(
            "OS: {} {} {}",
            platform.as_str(),
            os_release,
            env::consts::ARCH
        ),
        format!("Kernel: {}", kernel),
        format!("Uptime: {}", uptime::text(uptime::seconds())),
        format!("packages: {}", packages::query(platform)),
        format!("shell: {}", shell::query(platform)),
        format!(
            "Resolution: {}",
            display::query(platform).unwrap_or_else(|| NOT_SUPPORTED.to_string())
        ),
        format!(
            "CPU: {}",
            cpu::query(platform).unwrap_or_else(|| NOT_SUPPORTED.to_string())
        ),
        format!(
            "GPU: {}",
            gpu::query(platform).unwrap_or_else(|| NOT_SUPPORTED.to_string())
        ),
        format!("Memory: {}GB", memory::query()),
    ]
}

fn username() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

fn show_help() {
    println!(
        "{}",
        "sysfetch - display system information beside an OS logo".bold()
    );
    println!();
    println!("{}", "USAGE:".bold());
    println!("    sysfetch [COLOR]");
    println!();
    println!("{}", "ARGUMENTS:".bold());
    println!("    COLOR    Optional color scheme, one of:");
    println!("             {}", SUPPORTED.join(" "));
    println!("             'rainbow' colors each line differently;");
    println!("             no argument selects the default scheme");
    println!();
    println!("{}", "OPTIONS:".bold());
    println!("    --version      Output version information and exit");
    println!("    --help         Display this help and exit");
    println!();
    println!("{}", "EXIT STATUS:".bold());
    println!("    0   if successful");
    println!("    1   if the color is unsupported or an error occurs");
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::Color;

    #[test]
    fn test_no_arguments_selects_default_scheme() {
        match parse_arguments(&[]).unwrap() {
            Action::Run(scheme) => assert_eq!(scheme, Scheme::Default),
            _ => panic!("expected Run for empty args"),
        }
    }

    #[test]
    fn test_named_color_selects_uniform_scheme() {
        match parse_arguments(&["blue".to_string()]).unwrap() {
            Action::Run(scheme) => assert_eq!(scheme, Scheme::Uniform(Color::Blue)),
            _ => panic!("expected Run for 'blue'"),
        }
    }

    #[test]
    fn test_rainbow_token() {
        match parse_arguments(&["rainbow".to_string()]).unwrap() {
            Action::Run(scheme) => assert_eq!(scheme, Scheme::Rainbow),
            _ => panic!("expected Run for 'rainbow'"),
        }
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let err = parse_arguments(&["chartreuse".to_string()]).unwrap_err();
        assert!(err.contains("color not supported"));
    }

    #[test]
    fn test_invalid_option() {
        let err = parse_arguments(&["--invalid".to_string()]).unwrap_err();
        assert!(err.contains("invalid option"));
    }

    #[test]
    fn test_extra_operand() {
        let args = vec!["red".to_string(), "blue".to_string()];
        let err = parse_arguments(&args).unwrap_err();
        assert!(err.contains("extra operand"));
    }

    #[test]
    fn test_help_and_version_actions() {
        assert!(matches!(
            parse_arguments(&["--help".to_string()]),
            Ok(Action::ShowHelp)
        ));
        assert!(matches!(
            parse_arguments(&["--version".to_string()]),
            Ok(Action::ShowVersion)
        ));
    }

    #[test]
    fn test_info_lines_fixed_order() {
        let lines = info_lines(Platform::current());
        assert_eq!(lines.len(), 11);
        assert!(lines[0].contains('@'));
        assert_eq!(lines[1], SEPARATOR);
        let labels = [
            "OS:",
            "Kernel:",
            "Uptime:",
            "packages:",
            "shell:",
            "Resolution:",
            "CPU:",
            "GPU:",
            "Memory:",
        ];
        for (line, label) in lines[2..].iter().zip(labels) {
            assert!(line.starts_with(label), "{:?} should start {}", line, label);
        }
        assert!(lines[10].ends_with("GB"));
    }

    #[test]
    fn test_static_lines_are_idempotent() {
        let first = info_lines(Platform::current());
        let second = info_lines(Platform::current());
        // user@host, separator, and OS line never change between calls.
        assert_eq!(first[0], second[0]);
        assert_eq!(first[1], second[1]);
        assert_eq!(first[2], second[2]);
        assert_eq!(first[3], second[3]);
    }

    #[test]
    fn test_unsupported_color_exit_code() {
        assert_eq!(execute(&["chartreuse".to_string()]), 1);
    }

    #[test]
    fn test_version_exit_code() {
        assert_eq!(execute(&["--version".to_string()]), 0);
    }

    #[test]
    fn test_help_display() {
        show_help();
    }
}
