use std::fmt::Write;
use std::path::Path;

use crate::checker::{Violation, ViolationCounts};
use crate::rules::Severity;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Warning => ansi::YELLOW,
            Severity::Error => ansi::RED,
        }
    }

    /// Render one diagnostic block: location line, offending line text
    /// (both lines for the brace-placement check), then the message.
    #[must_use]
    pub fn format_violation(&self, path: &Path, violation: &Violation) -> String {
        let basename = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());

        let mut block = String::new();

        if let Some(next) = &violation.next_line {
            let _ = writeln!(
                block,
                "File \"{}\", lines {}-{}, in {basename}",
                path.display(),
                violation.line_no,
                violation.line_no + 1
            );
            let _ = writeln!(block, "{}", violation.line);
            let _ = writeln!(block, "{next}");
        } else {
            let _ = writeln!(
                block,
                "File \"{}\", line {}, in {basename}",
                path.display(),
                violation.line_no
            );
            let _ = writeln!(block, "{}", violation.line);
        }

        let _ = write!(
            block,
            "{}: {}",
            violation.severity.label(),
            violation.message
        );

        let color = Self::severity_color(violation.severity);
        format!("{}\n", self.colorize(&block, color))
    }

    /// Render the end-of-run summary line.
    #[must_use]
    pub fn format_summary(&self, totals: ViolationCounts) -> String {
        if totals.is_clean() {
            self.colorize("Looks good!", ansi::GREEN)
        } else {
            let summary = format!(
                "{} error(s) found. {} warning(s) found.",
                totals.errors, totals.warnings
            );
            self.colorize(&summary, ansi::YELLOW)
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
