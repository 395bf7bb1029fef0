//! Input discovery: classify files in a directory by extension.
//!
//! Classification is a pure function over file names. Front ends that want to
//! ask the user about unknown extensions do so with the returned list and
//! classify again with the extended set.

use std::{
    collections::{BTreeSet, HashSet},
    path::Path,
};

use anyhow::{Context, Result};
use log::{debug, warn};
use walkdir::WalkDir;

/// Outcome of [`classify_files`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Names whose extension is in the known set, in input order.
    pub recognized: Vec<String>,
    /// Each unknown extension once, in the order it was first seen.
    /// A file without an extension contributes `""`.
    pub unrecognized_extensions: Vec<String>,
}

/// The extension of `name` including its leading dot, or `""`.
///
/// Leading dots are not extension separators, so `.bashrc` has none while
/// `archive.tar.gz` has `.gz`.
pub fn extension_of(name: &str) -> &str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(pos) => &name[stem_start + pos..],
        None => "",
    }
}

/// The first name in `names` carrying `extension`, for prompts that show an
/// example file.
pub fn first_with_extension<'a>(names: &'a [String], extension: &str) -> Option<&'a str> {
    names
        .iter()
        .find(|name| extension_of(name) == extension)
        .map(String::as_str)
}

/// Split `names` into files with a known extension and the distinct
/// extensions that are not known.
pub fn classify_files<S: AsRef<str>>(
    names: &[S],
    known_extensions: &BTreeSet<String>,
) -> Classification {
    let mut recognized = Vec::new();
    let mut unrecognized_extensions = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for name in names {
        let name = name.as_ref();
        let ext = extension_of(name);
        if known_extensions.contains(ext) {
            recognized.push(name.to_string());
        } else if seen.insert(ext) {
            unrecognized_extensions.push(ext.to_string());
        }
    }

    Classification {
        recognized,
        unrecognized_extensions,
    }
}

/// Names of the regular files directly inside `dir`, sorted.
pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("cannot access path: {}", e);
                continue;
            }
        };
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => warn!("skipping non UTF-8 file name: {}", entry.path().display()),
        }
    }

    debug!("found {} files in {}", names.len(), dir.display());
    Ok(names)
}

/// List `dir` and classify its files against `known_extensions`.
pub fn scan_directory(dir: &Path, known_extensions: &BTreeSet<String>) -> Result<ScanResult> {
    let files =
        list_files(dir).with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
    let classification = classify_files(&files, known_extensions);
    Ok(ScanResult {
        files,
        classification,
    })
}

/// Everything found in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// All file names, recognized or not.
    pub files: Vec<String>,
    pub classification: Classification,
}
