//! XMP packet XML parser
//!
//! This module builds an [`XmlDocument`] from the packet text with quick-xml,
//! resolving every element and attribute prefix against the `xmlns`
//! declarations in scope where it appears.

use crate::core::error::{XmpError, XmpResult};
use crate::core::node::{Attribute, Element, QName, XmlDocument, XmlNode, XMLNS_NAMESPACE};
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Namespace URI bound to the reserved `xml` prefix
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Deepest element nesting accepted in a packet
///
/// Trees are walked and dropped recursively.
pub const MAX_DEPTH: usize = 512;

/// Parser for XMP packet XML
///
/// Unbound prefixes are kept on the name with no namespace instead of being
/// rejected; queries then simply do not match them.
#[derive(Debug, Default)]
pub struct PacketParser {
    // one frame per open element: (prefix, uri), `None` prefix is the default namespace
    scopes: Vec<Vec<(Option<String>, String)>>,
}

impl PacketParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a well-formed XML fragment with a single root element
    pub fn parse(&mut self, xml: &str) -> XmpResult<XmlDocument> {
        self.scopes.clear();

        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    Self::check_depth(&stack)?;
                    let element = self.open_element(&e)?;
                    if stack.is_empty() && root.is_some() {
                        return Err(XmpError::ParseError(
                            "Multiple root elements".to_string(),
                        ));
                    }
                    stack.push(element);
                }
                Ok(Event::Empty(e)) => {
                    Self::check_depth(&stack)?;
                    let element = self.open_element(&e)?;
                    self.scopes.pop();
                    Self::attach(element, &mut stack, &mut root)?;
                }
                Ok(Event::End(_)) => {
                    let element = stack.pop().ok_or_else(|| {
                        XmpError::ParseError("Unexpected closing tag".to_string())
                    })?;
                    self.scopes.pop();
                    Self::attach(element, &mut stack, &mut root)?;
                }
                Ok(Event::Text(e)) => {
                    // Decode XML entities (e.g., &quot; -> ")
                    let raw_text = String::from_utf8_lossy(e.as_ref());
                    let text = match unescape(&raw_text) {
                        Ok(unescaped) => unescaped.to_string(),
                        Err(_) => raw_text.to_string(),
                    };
                    Self::append_text(&mut stack, &text)?;
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e).to_string();
                    Self::append_text(&mut stack, &text)?;
                }
                Ok(Event::GeneralRef(e)) => {
                    let name = String::from_utf8_lossy(&e).to_string();
                    let text = resolve_reference(&name)?;
                    Self::append_text(&mut stack, &text)?;
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(XmpError::ParseError(format!(
                        "XML parsing error at position {}: {}",
                        reader.error_position(),
                        e
                    )));
                }
                // declarations, processing instructions, comments, doctype
                Ok(_) => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(XmpError::ParseError(format!(
                "Unclosed element <{}>",
                open.name.qualified()
            )));
        }

        root.map(XmlDocument::new)
            .ok_or_else(|| XmpError::ParseError("No root element".to_string()))
    }

    /// Fail when one more element would exceed [`MAX_DEPTH`]
    fn check_depth(stack: &[Element]) -> XmpResult<()> {
        if stack.len() >= MAX_DEPTH {
            return Err(XmpError::ParseError(format!(
                "Element nesting too deep (limit {})",
                MAX_DEPTH
            )));
        }
        Ok(())
    }

    /// Push the namespace frame for `start` and build its element
    fn open_element(&mut self, start: &BytesStart<'_>) -> XmpResult<Element> {
        let raw_attrs = Self::collect_attributes(start)?;

        let frame = raw_attrs
            .iter()
            .filter_map(|(key, value)| {
                if key == "xmlns" {
                    Some((None, value.clone()))
                } else {
                    key.strip_prefix("xmlns:")
                        .map(|prefix| (Some(prefix.to_string()), value.clone()))
                }
            })
            .collect();
        self.scopes.push(frame);

        let raw_name = String::from_utf8_lossy(start.name().as_ref()).to_string();
        let name = self.resolve_name(&raw_name, true);
        let attributes = raw_attrs
            .into_iter()
            .map(|(key, value)| Attribute {
                name: self.resolve_name(&key, false),
                value,
            })
            .collect();

        Ok(Element {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Collect attributes from an XML element
    fn collect_attributes(start: &BytesStart<'_>) -> XmpResult<Vec<(String, String)>> {
        let mut attrs = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| XmpError::ParseError(format!("Bad attribute: {}", e)))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            // Decode XML entities in attribute values (e.g., &quot; -> ")
            let raw_value = String::from_utf8_lossy(attr.value.as_ref());
            let value = match unescape(&raw_value) {
                Ok(unescaped) => unescaped.to_string(),
                Err(_) => raw_value.to_string(),
            };
            attrs.push((key, value));
        }
        Ok(attrs)
    }

    /// Split a raw name and bind its prefix
    ///
    /// The default namespace applies to element names only.
    fn resolve_name(&self, raw: &str, is_element: bool) -> QName {
        match raw.split_once(':') {
            Some((prefix, local)) => QName {
                prefix: Some(prefix.to_string()),
                local: local.to_string(),
                namespace: self.lookup(Some(prefix)),
            },
            None if raw == "xmlns" && !is_element => QName {
                prefix: None,
                local: raw.to_string(),
                namespace: Some(XMLNS_NAMESPACE.to_string()),
            },
            None => QName {
                prefix: None,
                local: raw.to_string(),
                namespace: if is_element { self.lookup(None) } else { None },
            },
        }
    }

    /// Find the URI bound to `prefix` in the innermost scope declaring it
    fn lookup(&self, prefix: Option<&str>) -> Option<String> {
        match prefix {
            Some("xml") => return Some(XML_NAMESPACE.to_string()),
            Some("xmlns") => return Some(XMLNS_NAMESPACE.to_string()),
            _ => {}
        }

        self.scopes
            .iter()
            .rev()
            .flat_map(|frame| frame.iter().rev())
            .find(|(p, _)| p.as_deref() == prefix)
            // xmlns="" undeclares the default namespace
            .filter(|(_, uri)| !uri.is_empty())
            .map(|(_, uri)| uri.clone())
    }

    /// Attach a finished element to its parent, or make it the root
    fn attach(
        element: Element,
        stack: &mut [Element],
        root: &mut Option<Element>,
    ) -> XmpResult<()> {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(XmlNode::Element(element));
            return Ok(());
        }
        if root.is_some() {
            return Err(XmpError::ParseError(
                "Multiple root elements".to_string(),
            ));
        }
        *root = Some(element);
        Ok(())
    }

    /// Append character data to the open element, merging adjacent text
    fn append_text(stack: &mut [Element], text: &str) -> XmpResult<()> {
        let Some(parent) = stack.last_mut() else {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(XmpError::ParseError(
                "Text outside of the root element".to_string(),
            ));
        };

        if let Some(XmlNode::Text(last)) = parent.children.last_mut() {
            last.push_str(text);
        } else if !text.is_empty() {
            parent.children.push(XmlNode::Text(text.to_string()));
        }
        Ok(())
    }
}

/// Resolve a predefined entity or character reference (name without `&`/`;`)
fn resolve_reference(name: &str) -> XmpResult<String> {
    let predefined = match name {
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "quot" => Some("\""),
        "apos" => Some("'"),
        _ => None,
    };
    if let Some(text) = predefined {
        return Ok(text.to_string());
    }

    let code = match name.strip_prefix('#') {
        Some(hex) if hex.starts_with('x') || hex.starts_with('X') => {
            u32::from_str_radix(&hex[1..], 16).ok()
        }
        Some(dec) => dec.parse::<u32>().ok(),
        None => {
            return Err(XmpError::ParseError(format!(
                "Unknown entity reference &{};",
                name
            )))
        }
    };

    code.and_then(char::from_u32)
        .map(|c| c.to_string())
        .ok_or_else(|| XmpError::ParseError(format!("Invalid character reference &{};", name)))
}

/// Parse packet text into a document
pub fn parse_document(xml: &str) -> XmpResult<XmlDocument> {
    PacketParser::new().parse(xml)
}
