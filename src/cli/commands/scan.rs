use anyhow::Result;

use super::super::args::ScanCommand;
use super::{CommandSummary, ScanSummary};
use crate::{config::load_config, core::scan_directory};

pub fn scan(cmd: ScanCommand) -> Result<CommandSummary> {
    let loaded = load_config(&cmd.dir)?;
    let extensions = loaded.config.extensions_with(&cmd.extensions)?;

    let result = scan_directory(&cmd.dir, &extensions)?;

    Ok(CommandSummary::Scan(ScanSummary {
        dir: cmd.dir,
        files: result.files,
        classification: result.classification,
        config_from_file: loaded.from_file,
    }))
}
