use std::path::{Path, PathBuf};

use log::info;

use super::{LanguageTag, TmxDocument, lines::read_lines};
use crate::error::ConvertError;

/// Inputs for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    pub source_lang: LanguageTag,
    pub target_lang: LanguageTag,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub output_path: PathBuf,
    pub unit_count: usize,
}

/// Read both inputs, pair them and write the TMX file.
///
/// Nothing is written unless both files were read and their line counts
/// match, so a failed run leaves any existing output untouched.
pub fn convert(request: &ConvertRequest) -> Result<ConvertSummary, ConvertError> {
    let source_lines = read_lines(&request.source_path)?;
    let target_lines = read_lines(&request.target_path)?;

    let doc = TmxDocument::build(
        source_lines,
        target_lines,
        &request.source_lang,
        &request.target_lang,
    )?;
    doc.write(&request.output_path)?;

    info!(
        "created {} with {} translation units",
        request.output_path.display(),
        doc.len()
    );

    Ok(ConvertSummary {
        output_path: request.output_path.clone(),
        unit_count: doc.len(),
    })
}

/// `<dir>/<stem>_<src>_<tgt>.tmx`, next to the source file.
pub fn default_output_path(
    source_path: &Path,
    source_lang: &LanguageTag,
    target_lang: &LanguageTag,
) -> PathBuf {
    let stem = source_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let file_name = format!("{}_{}_{}.tmx", stem, source_lang, target_lang);
    match source_path.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
