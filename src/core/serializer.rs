//! XML serializer
//!
//! Writes an element tree back to markup. Names are written as they appeared
//! in the source and namespace declarations are kept as ordinary attributes,
//! so the output re-parses to the same tree. Byte-for-byte equality with the
//! original packet is not a goal.

use crate::core::error::{XmpError, XmpResult};
use crate::core::node::{Element, XmlNode};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// Serializer for element trees
#[derive(Debug, Default)]
pub struct XmlSerializer;

impl XmlSerializer {
    /// Create a serializer writing compact output
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize an element and its subtree
    pub fn serialize(&self, element: &Element) -> XmpResult<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        Self::write_element(&mut writer, element)?;

        let result = writer.into_inner().into_inner();
        String::from_utf8(result)
            .map_err(|e| XmpError::SerializationError(format!("UTF-8 encoding error: {}", e)))
    }

    fn write_element(writer: &mut Writer<Cursor<Vec<u8>>>, element: &Element) -> XmpResult<()> {
        let name = element.name.qualified();
        let mut start = BytesStart::new(name.as_str());
        for attr in &element.attributes {
            let key = attr.name.qualified();
            start.push_attribute((key.as_str(), attr.value.as_str()));
        }

        if element.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &element.children {
            match child {
                XmlNode::Element(inner) => Self::write_element(writer, inner)?,
                XmlNode::Text(text) => {
                    writer.write_event(Event::Text(BytesText::new(text)))?;
                }
            }
        }
        writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        Ok(())
    }
}

/// Serialize an element with compact output
pub fn serialize_element(element: &Element) -> XmpResult<String> {
    XmlSerializer::new().serialize(element)
}
