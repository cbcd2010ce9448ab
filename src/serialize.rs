//! Tree serialization to SVG/XML text.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::{debug, trace};

use crate::Options;
use crate::ast::*;
use crate::elements::ToElement;
use crate::error::SvgError;

/// Serialize an element or builder to a string.
pub fn serialize(node: &impl ToElement, options: &Options) -> Result<String, SvgError> {
    let mut out = Vec::new();
    write_to(&mut out, &node.to_element(), options)?;
    Ok(String::from_utf8(out).map_err(|e| e.utf8_error())?)
}

/// Serialize an element into any writer.
pub fn write_to<W: Write>(out: W, elem: &Element, options: &Options) -> Result<(), SvgError> {
    debug!(root = %elem.name.full_name(), ?options, "serializing");

    let mut writer = match options.indent {
        Some(width) => Writer::new_with_indent(out, b' ', width),
        None => Writer::new(out),
    };

    if options.xml_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }

    write_element(&mut writer, elem, options)
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    elem: &Element,
    options: &Options,
) -> Result<(), SvgError> {
    let name = elem.name.full_name();
    trace!(element = %name, attrs = elem.attributes.len(), "writing element");

    let mut start = BytesStart::new(name.as_str());
    for attr in &elem.attributes {
        let key = attr.name.full_name();
        start.push_attribute((key.as_str(), attr.value.as_str()));
    }

    if elem.children.is_empty() && options.self_close_empty {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &elem.children {
        write_node(writer, child, options)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;

    Ok(())
}

fn write_node<W: Write>(
    writer: &mut Writer<W>,
    node: &Node,
    options: &Options,
) -> Result<(), SvgError> {
    match node {
        Node::Element(elem) => write_element(writer, elem, options)?,
        Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        Node::Comment(comment) => {
            // XML forbids `--` inside a comment and `-` right before `-->`
            if comment.contains("--") || comment.ends_with('-') {
                return Err(SvgError::InvalidSvg(format!(
                    "comment {comment:?} cannot be written as XML"
                )));
            }
            writer.write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))?
        }
        Node::CData(data) => writer.write_event(Event::CData(BytesCData::new(data.as_str())))?,
    }
    Ok(())
}
