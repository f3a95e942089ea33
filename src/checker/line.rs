use std::fs;
use std::path::Path;

use crate::error::{Result, StyleGuardError};
use crate::rules::{MAX_LINE_LENGTH, RuleSet, Severity};

use super::{FileReport, Violation};

/// Lines opening or continuing a doc-style block comment are skipped
/// entirely; comment bodies are assumed to be properly formatted.
const COMMENT_PREFIXES: [&str; 3] = ["/**", " *", " */"];

/// Evaluates lines against the rule table and two built-in checks
/// (line length and brace placement) that a single-line regex cannot express.
pub struct LineChecker<'a> {
    rules: &'a RuleSet,
}

impl<'a> LineChecker<'a> {
    #[must_use]
    pub const fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Check one terminator-stripped line, with the following line (if any)
    /// available for the brace-placement check.
    ///
    /// Each rule fires at most once per line; several rules may fire on the
    /// same line.
    #[must_use]
    pub fn check_line(
        &self,
        line: &str,
        line_no: usize,
        next_line: Option<&str>,
    ) -> Vec<Violation> {
        if COMMENT_PREFIXES.iter().any(|p| line.starts_with(p)) {
            return Vec::new();
        }

        let mut violations = Vec::new();

        for rule in self.rules.rules() {
            if rule.skips_comment_lines() && self.rules.is_comment_line(line) {
                continue;
            }
            if rule.matches(line) {
                violations.push(Violation {
                    line_no,
                    severity: rule.severity,
                    message: rule.message.to_string(),
                    line: line.to_string(),
                    next_line: None,
                });
            }
        }

        let length = line.chars().count();
        if length > MAX_LINE_LENGTH {
            violations.push(Violation {
                line_no,
                severity: Severity::Warning,
                message: format!(
                    "Line contains too many characters ({length} found, maximum is {MAX_LINE_LENGTH})"
                ),
                line: line.to_string(),
                next_line: None,
            });
        }

        if let Some(next) = next_line
            && line.ends_with(')')
            && next.trim_start().starts_with('{')
        {
            violations.push(Violation {
                line_no,
                severity: Severity::Error,
                message: r#"Place "{" on the same line as ")" separated by a space"#.to_string(),
                line: line.to_string(),
                next_line: Some(next.to_string()),
            });
        }

        violations
    }

    /// Check every line of a file, pairing each line with its successor.
    ///
    /// # Errors
    /// Returns [`StyleGuardError::FileRead`] if the file cannot be read.
    pub fn check_file(&self, path: &Path) -> Result<FileReport> {
        let source = fs::read_to_string(path).map_err(|source| StyleGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.check_source(path, &source))
    }

    /// Check already-loaded source text. Line numbers start at 1.
    #[must_use]
    pub fn check_source(&self, path: &Path, source: &str) -> FileReport {
        let lines: Vec<&str> = source.lines().collect();
        let mut violations = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let next_line = lines.get(i + 1).copied();
            violations.extend(self.check_line(line, i + 1, next_line));
        }

        FileReport::new(path.to_path_buf(), violations)
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
