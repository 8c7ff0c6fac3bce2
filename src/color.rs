use colored::{Color, Colorize};

/// Tokens accepted on the command line, in documentation order.
pub const SUPPORTED: [&str; 10] = [
    "red", "green", "yellow", "blue", "magenta", "cyan", "white", "gray", "black", "rainbow",
];

/// The separator row under `user@host` stays uncolored in every scheme.
const SEPARATOR_INDEX: usize = 1;

/// Per-line colors when no argument is given.
const DEFAULT_LINES: [Color; 11] = [
    Color::Yellow, // user@host
    Color::White,  // separator, never consulted
    Color::Blue,   // OS
    Color::Red,    // kernel
    Color::Red,    // uptime
    Color::Yellow, // packages
    Color::Yellow, // shell
    Color::Yellow, // resolution
    Color::Yellow, // CPU
    Color::Yellow, // GPU
    Color::Yellow, // memory
];

/// Rainbow mode: one distinct color per metric line, in metric order.
const RAINBOW_LINES: [Color; 11] = [
    Color::Red,
    Color::White, // separator, never consulted
    Color::TrueColor { r: 255, g: 87, b: 51 },
    Color::TrueColor { r: 255, g: 165, b: 0 },
    Color::Yellow,
    Color::Green,
    Color::TrueColor { r: 0, g: 170, b: 120 },
    Color::Cyan,
    Color::Blue,
    Color::TrueColor { r: 75, g: 0, b: 130 },
    Color::TrueColor { r: 143, g: 0, b: 255 },
];

/// Rendering scheme selected by the optional color argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Default,
    Uniform(Color),
    Rainbow,
}

impl Scheme {
    /// Validate a user-supplied token against the allow-list. An absent
    /// token selects the default scheme; an unknown token is an error
    /// and the caller must skip rendering entirely.
    pub fn parse(token: Option<&str>) -> Result<Scheme, String> {
        let Some(token) = token else {
            return Ok(Scheme::Default);
        };
        match token {
            "red" => Ok(Scheme::Uniform(Color::Red)),
            "green" => Ok(Scheme::Uniform(Color::Green)),
            "yellow" => Ok(Scheme::Uniform(Color::Yellow)),
            "blue" => Ok(Scheme::Uniform(Color::Blue)),
            "magenta" => Ok(Scheme::Uniform(Color::Magenta)),
            "cyan" => Ok(Scheme::Uniform(Color::Cyan)),
            "white" => Ok(Scheme::Uniform(Color::White)),
            "gray" => Ok(Scheme::Uniform(Color::BrightBlack)),
            "black" => Ok(Scheme::Uniform(Color::Black)),
            "rainbow" => Ok(Scheme::Rainbow),
            _ => Err(format!("color not supported: {}", token)),
        }
    }

    pub fn logo_color(self) -> Color {
        match self {
            Scheme::Default => Color::Cyan,
            Scheme::Uniform(color) => color,
            Scheme::Rainbow => Color::Red,
        }
    }

    /// Color for info line `index` in the fixed metric order, or `None`
    /// for lines that print unstyled.
    pub fn line_color(self, index: usize) -> Option<Color> {
        if index == SEPARATOR_INDEX {
            return None;
        }
        match self {
            Scheme::Uniform(color) => Some(color),
            Scheme::Default => Some(DEFAULT_LINES.get(index).copied().unwrap_or(Color::Yellow)),
            Scheme::Rainbow => Some(RAINBOW_LINES.get(index).copied().unwrap_or(Color::Magenta)),
        }
    }

    pub fn paint(self, index: usize, text: &str) -> String {
        match self.line_color(index) {
            Some(color) => text.color(color).to_string(),
            None => text.to_string(),
        }
    }

    pub fn paint_logo(self, line: &str) -> String {
        line.color(self.logo_color()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_token_parses() {
        for token in SUPPORTED {
            assert!(Scheme::parse(Some(token)).is_ok(), "{} rejected", token);
        }
    }

    #[test]
    fn test_absent_token_is_default() {
        assert_eq!(Scheme::parse(None), Ok(Scheme::Default));
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        let err = Scheme::parse(Some("chartreuse")).unwrap_err();
        assert!(err.contains("color not supported"));
        assert!(err.contains("chartreuse"));
    }

    #[test]
    fn test_rainbow_assigns_distinct_colors() {
        let scheme = Scheme::parse(Some("rainbow")).unwrap();
        assert_eq!(scheme, Scheme::Rainbow);

        let mut seen = Vec::new();
        for index in 0..11 {
            if index == SEPARATOR_INDEX {
                continue;
            }
            let color = scheme.line_color(index).unwrap();
            assert!(!seen.contains(&color), "line {} repeats {:?}", index, color);
            seen.push(color);
        }
    }

    #[test]
    fn test_uniform_applies_one_color_everywhere() {
        let scheme = Scheme::parse(Some("magenta")).unwrap();
        assert_eq!(scheme.logo_color(), Color::Magenta);
        for index in 0..11 {
            if index == SEPARATOR_INDEX {
                continue;
            }
            assert_eq!(scheme.line_color(index), Some(Color::Magenta));
        }
    }

    #[test]
    fn test_separator_is_never_colored() {
        for scheme in [
            Scheme::Default,
            Scheme::Uniform(Color::Green),
            Scheme::Rainbow,
        ] {
            assert_eq!(scheme.line_color(SEPARATOR_INDEX), None);
            assert_eq!(scheme.paint(SEPARATOR_INDEX, "-----"), "-----");
        }
    }

    #[test]
    fn test_gray_maps_to_bright_black() {
        assert_eq!(
            Scheme::parse(Some("gray")),
            Ok(Scheme::Uniform(Color::BrightBlack))
        );
    }
}
