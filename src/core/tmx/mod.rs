//! TMX document model and builder.
//!
//! A [`TmxDocument`] is built once from two line sequences and serialized
//! once (see the `writer` submodule). Building and writing are separate steps
//! so the document can be inspected before anything touches the filesystem.
//!
//! Pairing is strictly positional: line `i` of the source becomes the source
//! side of unit `i`, line `i` of the target becomes its target side.

mod writer;


use log::debug;

use super::LanguageTag;
use crate::error::LengthMismatch;

/// TMX format version written to the root element.
pub const TMX_VERSION: &str = "1.4";

pub const CREATION_TOOL: &str = "bitmx";
pub const CREATION_TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const ORIGINAL_FORMAT: &str = "bitmx";
pub const SEGMENT_TYPE: &str = "sentence";
pub const ADMIN_LANG: &str = "en-us";
pub const DATA_TYPE: &str = "plaintext";

/// The `<header>` record. Everything except `srclang` is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub creation_tool: &'static str,
    pub creation_tool_version: &'static str,
    pub segtype: &'static str,
    pub o_tmf: &'static str,
    pub adminlang: &'static str,
    pub datatype: &'static str,
    pub srclang: LanguageTag,
}

impl Header {
    pub fn new(srclang: LanguageTag) -> Self {
        Self {
            creation_tool: CREATION_TOOL,
            creation_tool_version: CREATION_TOOL_VERSION,
            segtype: SEGMENT_TYPE,
            o_tmf: ORIGINAL_FORMAT,
            adminlang: ADMIN_LANG,
            datatype: DATA_TYPE,
            srclang,
        }
    }

    /// Header attributes in the order they are written.
    pub fn attributes(&self) -> [(&'static str, &str); 7] {
        [
            ("creationtool", self.creation_tool),
            ("creationtoolversion", self.creation_tool_version),
            ("segtype", self.segtype),
            ("o-tmf", self.o_tmf),
            ("adminlang", self.adminlang),
            ("datatype", self.datatype),
            ("srclang", self.srclang.as_str()),
        ]
    }
}

/// One language-tagged segment (`<tuv>` holding a `<seg>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationVariant {
    pub lang: LanguageTag,
    pub segment: String,
}

/// One aligned source/target pair (`<tu>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit {
    pub source: TranslationVariant,
    pub target: TranslationVariant,
}

impl TranslationUnit {
    /// Source variant first, then target.
    pub fn variants(&self) -> [&TranslationVariant; 2] {
        [&self.source, &self.target]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmxDocument {
    header: Header,
    units: Vec<TranslationUnit>,
}

impl TmxDocument {
    /// Pair `source_lines[i]` with `target_lines[i]` for every `i`.
    ///
    /// Fails with [`LengthMismatch`] when the sequences differ in length; no
    /// truncation or padding is attempted.
    pub fn build(
        source_lines: Vec<String>,
        target_lines: Vec<String>,
        source_lang: &LanguageTag,
        target_lang: &LanguageTag,
    ) -> Result<Self, LengthMismatch> {
        if source_lines.len() != target_lines.len() {
            return Err(LengthMismatch {
                source_lines: source_lines.len(),
                target_lines: target_lines.len(),
            });
        }

        let units: Vec<TranslationUnit> = source_lines
            .into_iter()
            .zip(target_lines)
            .map(|(source, target)| TranslationUnit {
                source: TranslationVariant {
                    lang: source_lang.clone(),
                    segment: source,
                },
                target: TranslationVariant {
                    lang: target_lang.clone(),
                    segment: target,
                },
            })
            .collect();

        debug!(
            "built {} translation units ({} -> {})",
            units.len(),
            source_lang,
            target_lang
        );

        Ok(Self {
            header: Header::new(source_lang.clone()),
            units,
        })
    }

    pub fn version(&self) -> &'static str {
        TMX_VERSION
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn units(&self) -> &[TranslationUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
