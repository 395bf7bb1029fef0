//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `convert`: Pair a source and a target file into a TMX file
//! - `scan`: List the files of a directory and which ones are recognized
//! - `init`: Write a default configuration file
//! - `interactive`: Pick directory, files and languages through prompts

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::LanguageTag;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Convert(cmd)) => cmd.common.verbose,
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Interactive(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// Source language text file, one segment per line
    pub source: PathBuf,

    /// Target language text file, line-aligned with the source
    pub target: PathBuf,

    /// Source language code, e.g. en or en-US
    #[arg(short = 's', long, value_name = "CODE")]
    pub source_lang: LanguageTag,

    /// Target language code, e.g. fr or fr-CA
    #[arg(short = 't', long, value_name = "CODE")]
    pub target_lang: LanguageTag,

    /// Output file (default: <source stem>_<source lang>_<target lang>.tmx next to the source)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Additional extension to recognize (e.g. .md)
    /// Can be specified multiple times: -e .md -e .csv
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InteractiveCommand {
    /// Directory containing the text files (prompted for if omitted)
    pub dir: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a pair of line-aligned text files into a TMX file
    Convert(ConvertCommand),
    /// List files in a directory and report unrecognized extensions
    Scan(ScanCommand),
    /// Initialize a new .bitmxrc.json configuration file
    Init,
    /// Choose files and languages interactively, then convert
    Interactive(InteractiveCommand),
}
