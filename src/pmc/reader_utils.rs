//! Reader-based XML helpers for the PMC parser
//!
//! All helpers work on a borrowed `Reader<&[u8]>`, so events reference the
//! input document rather than a scratch buffer.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;

use crate::error::Result;

/// Create a configured `Reader` from a string slice.
///
/// - text is not trimmed, so mixed content keeps its internal whitespace
/// - `<tag/>` is expanded into `Start` + `End`
pub(super) fn make_reader(content: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().expand_empty_elements = true;
    reader
}

/// Read all text inside the current element, dropping child tags.
///
/// The reader must have just consumed `Event::Start` for `parent_tag`. Returns the
/// trimmed, unescaped text.
pub(super) fn read_text_content(reader: &mut Reader<&[u8]>, parent_tag: &[u8]) -> Result<String> {
    let mut text = String::new();
    let mut depth: u32 = 1;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == parent_tag => depth += 1,
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e)),
            Event::End(e) if e.name().as_ref() == parent_tag => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text.trim().to_string())
}

/// Read the raw markup inside the current element without any unescaping.
///
/// The reader must have just consumed `Event::Start` for `tag`.
pub(super) fn read_inner_xml(reader: &mut Reader<&[u8]>, tag: QName) -> Result<String> {
    Ok(reader.read_text(tag)?.into_owned())
}

/// Extract an attribute value from a start tag
pub(super) fn get_attr(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.try_get_attribute(name)
        .ok()?
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

/// Skip an entire element. The reader must have just consumed `Event::Start` for `tag`.
pub(super) fn skip_element(reader: &mut Reader<&[u8]>, tag: QName) -> Result<()> {
    reader.read_to_end(tag)?;
    Ok(())
}

/// Remove every tag from a markup fragment and collapse runs of whitespace
pub(crate) fn strip_xml_tags(content: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for ch in content.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }

    result.split_whitespace().collect::<Vec<_>>().join(" ")
}
