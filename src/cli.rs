use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "Flag common C/C++ formatting mistakes")]
#[command(long_about = "A simple-minded style checker for C/C++ code. Scans each file \
    line by line with a fixed rule table and reports spacing, tab, line-length and \
    brace-placement mistakes.\n\n\
    Exit codes:\n  \
    0 - No errors found (warnings alone do not fail the run)\n  \
    1 - Style errors found\n  \
    2 - Usage or runtime error")]
pub struct Cli {
    /// Files to check, in order
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
