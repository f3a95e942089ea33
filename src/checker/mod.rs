mod line;
mod report;

pub use line::LineChecker;
pub use report::{FileReport, Violation, ViolationCounts};
