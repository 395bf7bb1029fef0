//! The guided flow: directory, files, languages, then conversion.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Result;

use super::super::{args::InteractiveCommand, prompt::Prompter};
use super::{CommandSummary, NoInputFilesSummary, convert::run_request};
use crate::{
    config::load_config,
    core::{
        ConvertRequest, classify_files, default_output_path, scan::first_with_extension,
        scan_directory,
    },
};

pub fn interactive(cmd: InteractiveCommand) -> Result<CommandSummary> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());
    run(cmd.dir, &mut prompter)
}

pub(crate) fn run<R: BufRead, W: Write>(
    dir: Option<PathBuf>,
    prompter: &mut Prompter<R, W>,
) -> Result<CommandSummary> {
    let dir = match dir {
        Some(dir) => dir,
        None => prompter.directory()?,
    };

    let mut extensions = load_config(&dir)?.config.extensions;
    let scan = scan_directory(&dir, &extensions)?;

    let mut accepted_any = false;
    for ext in &scan.classification.unrecognized_extensions {
        let example = first_with_extension(&scan.files, ext).unwrap_or_default();
        prompter.say(format!("Unrecognized extension '{}' for file: {}", ext, example))?;
        let question = format!(
            "Would you like to add '{}' to the recognized extensions? (y/n): ",
            ext
        );
        if prompter.confirm(&question)? {
            extensions.insert(ext.clone());
            accepted_any = true;
            prompter.say(format!(
                "Extension '{}' has been added to the recognized list.",
                ext
            ))?;
        }
    }

    let files = if accepted_any {
        classify_files(&scan.files, &extensions).recognized
    } else {
        scan.classification.recognized
    };

    if files.is_empty() {
        return Ok(CommandSummary::NoInputFiles(NoInputFilesSummary { dir, extensions }));
    }

    let source_file = prompter.select_file(&files, "source")?.to_string();
    let target_file = prompter.select_file(&files, "target")?.to_string();

    let source_lang = prompter.language("source")?;
    let target_lang = prompter.language("target")?;

    let source_path = dir.join(&source_file);
    let output_path = default_output_path(&source_path, &source_lang, &target_lang);

    run_request(&ConvertRequest {
        source_path,
        target_path: dir.join(&target_file),
        source_lang,
        target_lang,
        output_path,
    })
}
