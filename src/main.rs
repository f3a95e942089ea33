use clap::Parser;

use style_guard::checker::{LineChecker, ViolationCounts};
use style_guard::cli::{Cli, ColorChoice};
use style_guard::output::{ColorMode, TextFormatter};
use style_guard::rules::RuleSet;
use style_guard::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> style_guard::Result<i32> {
    let rules = RuleSet::default();
    let checker = LineChecker::new(&rules);
    let formatter = TextFormatter::new(color_choice_to_mode(cli.color));

    // Files are processed strictly in argument order, one at a time. An
    // unreadable file aborts the whole run.
    let mut totals = ViolationCounts::default();
    for path in &cli.files {
        let report = checker.check_file(path)?;
        for violation in &report.violations {
            println!("{}", formatter.format_violation(&report.path, violation));
        }
        totals += report.counts;
    }

    println!("{}", formatter.format_summary(totals));

    if totals.errors > 0 {
        Ok(EXIT_VIOLATIONS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}
