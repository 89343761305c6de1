//! Serialization of file groups to indented Checkstyle XML.

use crate::builder::FileGroup;
use crate::escape::escape_attribute;
use crate::{Error, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

/// Declaration line; consumers expect the space before `?>`.
const XML_DECLARATION: &str = "<?xml version=\"1.0\" ?>\n";

const INDENT_SIZE: usize = 2;

/// Write the complete document for `files`.
///
/// Attribute values are written raw: the builder stores `message` already
/// escaped, and everything else is escaped here.
pub(crate) fn write_document<'a>(
    version: &str,
    files: impl IntoIterator<Item = &'a FileGroup>,
) -> Result<String> {
    let mut buffer = Vec::with_capacity(256);
    buffer.extend_from_slice(XML_DECLARATION.as_bytes());
    let mut writer = Writer::new_with_indent(buffer, b' ', INDENT_SIZE);

    let version = escape_attribute(version);
    let mut root = BytesStart::new("checkstyle");
    root.push_attribute(("version".as_bytes(), version.as_bytes()));
    write_event(&mut writer, Event::Start(root))?;

    for group in files {
        write_file_group(&mut writer, group)?;
    }

    write_event(&mut writer, Event::End(BytesEnd::new("checkstyle")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(|err| Error::Serialization(err.to_string()))
}

fn write_file_group(writer: &mut Writer<Vec<u8>>, group: &FileGroup) -> Result<()> {
    let name = escape_attribute(&group.path);
    let mut file = BytesStart::new("file");
    file.push_attribute(("name".as_bytes(), name.as_bytes()));
    write_event(writer, Event::Start(file))?;

    for entry in &group.entries {
        let source = escape_attribute(&entry.source);
        let mut error = BytesStart::new("error");
        error.push_attribute(("column".as_bytes(), entry.column.as_bytes()));
        error.push_attribute(("line".as_bytes(), entry.line.as_bytes()));
        error.push_attribute(("message".as_bytes(), entry.message.as_bytes()));
        error.push_attribute(("severity".as_bytes(), entry.severity.as_str().as_bytes()));
        error.push_attribute(("source".as_bytes(), source.as_bytes()));
        write_event(writer, Event::Empty(error))?;
    }

    write_event(writer, Event::End(BytesEnd::new("file")))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|err| Error::Serialization(err.to_string()))
}
