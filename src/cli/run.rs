use super::{
    args::{Arguments, Command},
    commands::{
        CommandSummary, convert::convert, init::init, interactive::interactive, scan::scan,
    },
};
use anyhow::Result;

/// Dispatch to the handler of the parsed subcommand.
///
/// # Returns
/// - `Ok(CommandSummary)` describing what the command did
/// - `Err` if the command fails (e.g., unreadable input, invalid config)
pub fn run(Arguments { command }: Arguments) -> Result<CommandSummary> {
    match command {
        Some(Command::Convert(cmd)) => convert(cmd),
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Init) => init(),
        Some(Command::Interactive(cmd)) => interactive(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
