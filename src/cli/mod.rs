//! Command-line interface layer: argument parsing, command dispatch and
//! reporting.

use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
pub mod prompt;
pub mod report;
mod run;

pub use args::*;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let summary = run::run(args)?;
    report::print(&summary);

    Ok(summary.exit_status())
}
