//! TMX serialization.

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::debug;
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use tempfile::{Builder, NamedTempFile};

use super::{TMX_VERSION, TmxDocument, TranslationUnit};
use crate::error::WriteError;

const INDENT_SIZE: usize = 2;

impl TmxDocument {
    /// Serialize the document into `inner` and hand it back.
    ///
    /// Segment text is escaped, never wrapped in CDATA. A segment holding a
    /// character that XML 1.0 cannot represent (most C0 controls, U+FFFE,
    /// U+FFFF) fails with [`io::ErrorKind::InvalidData`].
    pub fn write_xml<W: Write>(&self, inner: W) -> io::Result<W> {
        let mut writer = Writer::new_with_indent(inner, b' ', INDENT_SIZE);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new("tmx").with_attributes([("version", TMX_VERSION)]),
        ))?;
        writer.write_event(Event::Empty(
            BytesStart::new("header").with_attributes(self.header.attributes()),
        ))?;
        writer.write_event(Event::Start(BytesStart::new("body")))?;
        for unit in &self.units {
            write_unit(&mut writer, unit)?;
        }
        writer.write_event(Event::End(BytesEnd::new("body")))?;
        writer.write_event(Event::End(BytesEnd::new("tmx")))?;

        let mut inner = writer.into_inner();
        inner.write_all(b"\n")?;
        Ok(inner)
    }

    /// The serialized document as a string.
    pub fn to_xml(&self) -> io::Result<String> {
        let bytes = self.write_xml(Vec::new())?;
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the document to `path`, replacing any existing file.
    ///
    /// The XML goes to a temporary file in the destination directory which is
    /// then renamed over `path`, so a failed write never leaves a truncated
    /// document behind.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), WriteError> {
        let path = path.as_ref();
        let fail = |source: io::Error| WriteError {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let file = temp_file_for(path, dir).map_err(fail)?;
        let file = self
            .write_xml(BufWriter::new(file))
            .and_then(|out| out.into_inner().map_err(|e| e.into_error()))
            .map_err(fail)?;
        file.as_file().sync_all().map_err(fail)?;
        file.persist(path).map_err(|e| fail(e.error))?;

        debug!("wrote {} units to {}", self.units.len(), path.display());
        Ok(())
    }
}

/// A temporary file in `dir` that will end up with the permissions `target`
/// would get from a plain create: the existing file's mode when overwriting,
/// otherwise 0o666 less the umask.
fn temp_file_for(target: &Path, dir: &Path) -> io::Result<NamedTempFile> {
    let existing = fs::metadata(target).ok().map(|m| m.permissions());

    #[allow(unused_mut)]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(
            existing
                .clone()
                .unwrap_or_else(|| fs::Permissions::from_mode(0o666)),
        );
    }

    let file = builder.tempfile_in(dir)?;
    // the umask also applied to the copied mode
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }
    Ok(file)
}

/// Characters allowed by the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

fn check_segment(segment: &str) -> io::Result<()> {
    match segment.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "segment {:?} contains U+{:04X}, which XML 1.0 does not allow",
                segment, c as u32
            ),
        )),
        None => Ok(()),
    }
}

fn write_unit<W: Write>(writer: &mut Writer<W>, unit: &TranslationUnit) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("tu")))?;
    for variant in unit.variants() {
        check_segment(&variant.segment)?;
        writer.write_event(Event::Start(
            BytesStart::new("tuv").with_attributes([("xml:lang", variant.lang.as_str())]),
        ))?;
        writer.write_event(Event::Start(BytesStart::new("seg")))?;
        writer.write_event(Event::Text(BytesText::new(&variant.segment)))?;
        writer.write_event(Event::End(BytesEnd::new("seg")))?;
        writer.write_event(Event::End(BytesEnd::new("tuv")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("tu")))
}
