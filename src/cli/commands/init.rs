use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandSummary> {
    init_in(Path::new("."))
}

pub(crate) fn init_in(dir: &Path) -> Result<CommandSummary> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandSummary::Init(InitSummary { created: false }));
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(CommandSummary::Init(InitSummary { created: true }))
}
