//! Line-based prompts for the interactive command.
//!
//! Generic over the input and output streams so the whole dialogue can be
//! driven from tests.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

use crate::core::LanguageTag;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of output.
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Show `question` and return the trimmed answer.
    ///
    /// Fails when the input is exhausted, so callers that re-prompt on bad
    /// answers cannot loop forever.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read answer")?;
        if read == 0 {
            anyhow::bail!("input ended while waiting for an answer");
        }
        Ok(answer.trim().to_string())
    }

    /// Ask until the answer names an existing directory.
    pub fn directory(&mut self) -> Result<PathBuf> {
        loop {
            let answer = self.ask("Enter the directory containing the text files: ")?;
            let path = PathBuf::from(&answer);
            if !answer.is_empty() && path.is_dir() {
                return Ok(path);
            }
            self.say("Invalid directory. Please try again.")?;
        }
    }

    /// A yes/no question; only `y` (any case) counts as yes.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// List `files` numbered from 1 and ask for one of them.
    pub fn select_file<'a>(&mut self, files: &'a [String], file_type: &str) -> Result<&'a str> {
        if files.is_empty() {
            anyhow::bail!("no {} files to choose from", file_type);
        }

        self.say(format!("Available {} files:", file_type))?;
        for (i, file) in files.iter().enumerate() {
            self.say(format!("{}: {}", i + 1, file))?;
        }

        let question = format!("Select the {} file (1-{}): ", file_type, files.len());
        loop {
            let answer = self.ask(&question)?;
            if let Ok(choice) = answer.parse::<usize>()
                && (1..=files.len()).contains(&choice)
            {
                return Ok(&files[choice - 1]);
            }
            self.say("Invalid selection. Please try again.")?;
        }
    }

    /// Ask until the answer is a valid language tag.
    pub fn language(&mut self, role: &str) -> Result<LanguageTag> {
        let question = format!("Enter the {} language code (e.g., 'en', 'fr'): ", role);
        loop {
            let answer = self.ask(&question)?;
            match LanguageTag::parse(&answer) {
                Ok(tag) => return Ok(tag),
                Err(_) => self.say("Invalid language code format. Please try again.")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
