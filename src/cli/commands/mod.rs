pub mod convert;
pub mod init;
pub mod interactive;
pub mod scan;

use std::{collections::BTreeSet, path::PathBuf};

use super::exit_status::ExitStatus;
use crate::core::{Classification, ConvertSummary};
use crate::error::LengthMismatch;

/// What a command did, for reporting and the exit status.
#[derive(Debug)]
pub enum CommandSummary {
    Converted(ConvertSummary),
    LengthMismatch(LengthMismatch),
    NoInputFiles(NoInputFilesSummary),
    Scan(ScanSummary),
    Init(InitSummary),
}

impl CommandSummary {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            CommandSummary::Converted(_) | CommandSummary::Scan(_) => ExitStatus::Success,
            CommandSummary::Init(summary) if summary.created => ExitStatus::Success,
            CommandSummary::Init(_)
            | CommandSummary::LengthMismatch(_)
            | CommandSummary::NoInputFiles(_) => ExitStatus::Failure,
        }
    }
}

#[derive(Debug)]
pub struct NoInputFilesSummary {
    pub dir: PathBuf,
    pub extensions: BTreeSet<String>,
}

#[derive(Debug)]
pub struct ScanSummary {
    pub dir: PathBuf,
    /// All file names in the directory, sorted.
    pub files: Vec<String>,
    pub classification: Classification,
    /// True if the extension set came from a config file.
    pub config_from_file: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}
