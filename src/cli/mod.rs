//! Command-line layer: argument parsing, settings resolution, rendering and
//! CI output. The scanning engine itself lives in `core`.

use anyhow::Result;

pub mod args;
mod exit_status;
pub mod github;
mod logging;
pub mod report;
pub mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use logging::init_logging;

/// Name of the GitHub Actions step output carrying the report.
pub const REPORT_OUTPUT_KEY: &str = "report";

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let settings = run::Settings::resolve(&args)?;
    let output = run::run(&settings)?;

    if settings.github_actions {
        github::set_output(REPORT_OUTPUT_KEY, &output.rendered)?;
    }
    println!("{}", output.rendered);
    report::print_summary(&output.report);

    if settings.strict && !output.report.missing.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
