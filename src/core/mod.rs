//! Conversion core.
//!
//! ## Module Structure
//!
//! - `lines`: Load a text file as an ordered sequence of trimmed lines
//! - `language`: Validated `xx` / `xx-XX` language tags
//! - `tmx`: TMX document model, builder and serializer
//! - `scan`: Classify directory contents by extension
//! - `convert`: Read, build and write in one call

pub mod convert;
pub mod language;
pub mod lines;
pub mod scan;
pub mod tmx;

pub use convert::{ConvertRequest, ConvertSummary, convert, default_output_path};
pub use language::LanguageTag;
pub use lines::{parse_lines, read_lines};
pub use scan::{Classification, ScanResult, classify_files, extension_of, scan_directory};
pub use tmx::{Header, TmxDocument, TranslationUnit, TranslationVariant};
