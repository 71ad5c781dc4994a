//! Rendering targets for command reports.

use std::fmt;

/// One semantic line of a report.
#[derive(Debug, Clone, Copy)]
pub enum Line<'a> {
    Heading(&'a str),
    Bullet(&'a str),
    Added(&'a str),
    Warning(&'a str),
    Error(&'a str),
    Rule(&'a str),
    Text(&'a str),
    Blank,
}

impl Line<'_> {
    /// Diagnostics go to stderr; everything else to stdout.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::Warning(_) | Self::Error(_))
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading(text) => write!(f, "{text}:"),
            Self::Bullet(text) => write!(f, "  - {text}"),
            Self::Added(text) => write!(f, "  + {text}"),
            Self::Rule(label) => write!(f, "── {label} ──"),
            Self::Warning(text) | Self::Error(text) | Self::Text(text) => f.write_str(text),
            Self::Blank => Ok(()),
        }
    }
}

/// Where a report's lines end up.
pub trait Output {
    fn line(&mut self, line: Line<'_>);
}

/// A report renders itself as a sequence of lines.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Writes report lines to the terminal.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, line: Line<'_>) {
        if line.is_diagnostic() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// Collects rendered lines for assertions.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn line(&mut self, line: Line<'_>) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_display() {
        assert_eq!(Line::Heading("Models").to_string(), "Models:");
        assert_eq!(Line::Bullet("User").to_string(), "  - User");
        assert_eq!(Line::Added("user.ts").to_string(), "  + user.ts");
        assert_eq!(Line::Rule("Summary").to_string(), "── Summary ──");
        assert_eq!(Line::Blank.to_string(), "");
    }

    #[test]
    fn test_diagnostic_lines() {
        assert!(Line::Warning("w").is_diagnostic());
        assert!(Line::Error("e").is_diagnostic());
        assert!(!Line::Text("t").is_diagnostic());
    }
}
