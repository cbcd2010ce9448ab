//! Reading SVG/XML markup back into the generic tree.
//!
//! Only the structure is read: attribute values stay strings, and callers pick
//! them apart with [`Element::attr_as`].

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::ast::*;
use crate::error::SvgError;

/// Parse the first root element of an SVG/XML string.
pub fn parse_element(svg: &str) -> Result<Element, SvgError> {
    let mut reader = Reader::from_str(svg);

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let root = parse_children(&mut reader, &start)?;
                debug!(root = %root.name.full_name(), "parsed element");
                return Ok(root);
            }
            Event::Empty(start) => return parse_element_start(&start),
            Event::Eof => break,
            // XML declaration, doctype, comments and whitespace before the root
            _ => {}
        }
    }

    Err(SvgError::InvalidSvg("No root element found".into()))
}

fn parse_children(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Element, SvgError> {
    let mut element = parse_element_start(start)?;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                element
                    .children
                    .push(Node::Element(parse_children(reader, &start)?));
            }
            Event::Empty(start) => {
                element
                    .children
                    .push(Node::Element(parse_element_start(&start)?));
            }
            Event::End(_) => {
                break;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if !text.trim().is_empty() {
                    element.children.push(Node::Text(text.into_owned()));
                }
            }
            Event::Comment(comment) => {
                element
                    .children
                    .push(Node::Comment(String::from_utf8_lossy(&comment).into_owned()));
            }
            Event::CData(cdata) => {
                element
                    .children
                    .push(Node::CData(String::from_utf8_lossy(&cdata).into_owned()));
            }
            Event::Eof => {
                return Err(SvgError::InvalidSvg("Unexpected end of file".into()));
            }
            _ => {}
        }
    }

    Ok(element)
}

fn parse_element_start(start: &BytesStart) -> Result<Element, SvgError> {
    let name_bytes = start.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;

    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        element.attributes.add(key, value.into_owned());
    }

    Ok(element)
}
