use std::ops::{Add, AddAssign};
use std::path::PathBuf;

use crate::rules::Severity;

/// A single style violation found on a line.
///
/// `next_line` is only present for the two-line brace-placement check, where
/// the diagnostic shows both offending lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub line_no: usize,
    pub severity: Severity,
    pub message: String,
    pub line: String,
    pub next_line: Option<String>,
}

/// Error and warning totals, returned by value and summed by the driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViolationCounts {
    pub errors: usize,
    pub warnings: usize,
}

impl ViolationCounts {
    pub const fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Warning => self.warnings += 1,
            Severity::Error => self.errors += 1,
        }
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}

impl Add for ViolationCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            errors: self.errors + rhs.errors,
            warnings: self.warnings + rhs.warnings,
        }
    }
}

impl AddAssign for ViolationCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// All violations found in one file, with their summed counts.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub violations: Vec<Violation>,
    pub counts: ViolationCounts,
}

impl FileReport {
    #[must_use]
    pub fn new(path: PathBuf, violations: Vec<Violation>) -> Self {
        let mut counts = ViolationCounts::default();
        for violation in &violations {
            counts.record(violation.severity);
        }
        Self {
            path,
            violations,
            counts,
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
