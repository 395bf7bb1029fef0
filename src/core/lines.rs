//! Line reader: loads a text file as an ordered sequence of trimmed lines.

use std::{fs, io, path::Path};

use log::debug;

use crate::error::ReadError;

const BOM: char = '\u{feff}';

/// Read `path` as UTF-8 and return one trimmed string per line.
///
/// Blank lines are kept as empty strings so that line `i` of one file always
/// lines up with line `i` of the other.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, ReadError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ReadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let text = String::from_utf8(bytes).map_err(|e| ReadError::Decode {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;

    let lines = parse_lines(&text);
    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split `text` on `\n`, `\r\n` or a lone `\r` and trim every line.
///
/// A final line terminator does not start a new (empty) line.
pub fn parse_lines(text: &str) -> Vec<String> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(['\n', '\r']) {
        lines.push(rest[..pos].trim().to_string());
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    if !rest.is_empty() {
        lines.push(rest.trim().to_string());
    }
    lines
}
