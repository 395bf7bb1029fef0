use anyhow::Result;

use super::super::args::ConvertCommand;
use super::CommandSummary;
use crate::core::{ConvertRequest, convert as convert_files, default_output_path};
use crate::error::ConvertError;

pub fn convert(cmd: ConvertCommand) -> Result<CommandSummary> {
    let output_path = cmd
        .output
        .unwrap_or_else(|| default_output_path(&cmd.source, &cmd.source_lang, &cmd.target_lang));

    let request = ConvertRequest {
        source_path: cmd.source,
        target_path: cmd.target,
        source_lang: cmd.source_lang,
        target_lang: cmd.target_lang,
        output_path,
    };

    run_request(&request)
}

/// Run a conversion, turning a line count mismatch into a reportable outcome
/// rather than an error.
pub(crate) fn run_request(request: &ConvertRequest) -> Result<CommandSummary> {
    match convert_files(request) {
        Ok(summary) => Ok(CommandSummary::Converted(summary)),
        Err(ConvertError::LengthMismatch(mismatch)) => Ok(CommandSummary::LengthMismatch(mismatch)),
        Err(err) => Err(err.into()),
    }
}
