//! Reads rendered documents back with quick-xml.

#![allow(dead_code)]

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedError {
    pub column: String,
    pub line: String,
    pub message: String,
    pub severity: String,
    pub source: String,
    pub attribute_order: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ParsedReport {
    pub version: String,
    pub files: Vec<(String, Vec<ParsedError>)>,
}

fn attribute(element: &BytesStart<'_>, name: &str) -> String {
    element
        .try_get_attribute(name)
        .expect("well-formed attribute")
        .unwrap_or_else(|| panic!("missing attribute {name}"))
        .unescape_value()
        .expect("unescapable attribute")
        .into_owned()
}

pub fn parse_report(xml: &str) -> ParsedReport {
    let mut reader = Reader::from_str(xml);
    let mut report = ParsedReport::default();

    loop {
        match reader.read_event().expect("rendered document is valid XML") {
            Event::Start(e) if e.name().as_ref() == b"checkstyle" => {
                report.version = attribute(&e, "version");
            }
            Event::Start(e) if e.name().as_ref() == b"file" => {
                report.files.push((attribute(&e, "name"), Vec::new()));
            }
            Event::Empty(e) if e.name().as_ref() == b"error" => {
                let attribute_order = e
                    .attributes()
                    .map(|a| {
                        let a = a.expect("well-formed attribute");
                        String::from_utf8(a.key.as_ref().to_vec()).unwrap()
                    })
                    .collect();
                let parsed = ParsedError {
                    column: attribute(&e, "column"),
                    line: attribute(&e, "line"),
                    message: attribute(&e, "message"),
                    severity: attribute(&e, "severity"),
                    source: attribute(&e, "source"),
                    attribute_order,
                };
                report
                    .files
                    .last_mut()
                    .expect("<error> outside <file>")
                    .1
                    .push(parsed);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    report
}
