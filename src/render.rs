use std::io::{self, BufWriter, Write};

/// Printable width of a line: ANSI escape sequences contribute zero.
fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_ansi = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_ansi = true;
        } else if in_ansi {
            if c.is_ascii_alphabetic() {
                in_ansi = false;
            }
        } else {
            len += 1;
        }
    }
    len
}

/// Print logo and info lines side by side, one row per index.
///
/// Emits exactly `max(logo.len(), info.len())` rows. Once the logo is
/// exhausted, the left column is blank-padded to the width of the widest
/// logo line seen so far during iteration (a running maximum, not the
/// global one). Columns are joined by a single tab; an empty left column
/// leaves the info line unprefixed, and an empty right column leaves no
/// trailing tab. Length mismatches are never an error.
pub fn render_to<W: Write>(out: &mut W, logo: &[String], info: &[String]) -> io::Result<()> {
    let rows = logo.len().max(info.len());
    let mut widest = 0;
    for i in 0..rows {
        let pad;
        let left: &str = match logo.get(i) {
            Some(line) => {
                widest = widest.max(visible_len(line));
                line
            }
            None => {
                pad = " ".repeat(widest);
                &pad
            }
        };
        let right = info.get(i).map(String::as_str).unwrap_or("");

        if left.is_empty() {
            writeln!(out, "{}", right)?;
        } else if right.is_empty() {
            writeln!(out, "{}", left)?;
        } else {
            writeln!(out, "{}\t{}", left, right)?;
        }
    }
    Ok(())
}

/// Render to standard output.
pub fn render(logo: &[String], info: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render_to(&mut out, logo, info)?;
    out.flush()
}
