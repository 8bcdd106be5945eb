//! XML node types
//!
//! This module defines the owned XML tree the queries run against:
//! - XmlDocument: the document node, owning the root element
//! - Element: an element with resolved namespace, attributes and children
//! - XmlNode: a child of an element (element or text)

/// Namespace URI reserved for `xmlns` declarations
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

/// A namespace-resolved XML name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QName {
    /// Prefix as written in the source, if any
    pub prefix: Option<String>,
    /// Local part of the name
    pub local: String,
    /// Namespace URI the prefix was bound to when the name was read
    pub namespace: Option<String>,
}

impl QName {
    /// Create a name with no prefix and no namespace
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local: local.into(),
            namespace: None,
        }
    }

    /// The name as written in the source (`prefix:local` or `local`)
    pub fn qualified(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.local),
            None => self.local.clone(),
        }
    }

    /// Check the namespace URI and local name
    pub fn is(&self, namespace: &str, local: &str) -> bool {
        self.local == local && self.namespace.as_deref() == Some(namespace)
    }
}

/// An attribute on an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

/// A child node of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// An element
    Element(Element),
    /// Character data (text or CDATA, references already resolved)
    Text(String),
}

impl XmlNode {
    /// Get the element, if this is an element node
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        }
    }
}

/// An XML element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: QName,
    pub attributes: Vec<Attribute>,
    pub children: Vec<XmlNode>,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Local part of the element name
    pub fn local_name(&self) -> &str {
        &self.name.local
    }

    /// Namespace URI of the element, if any
    pub fn namespace_uri(&self) -> Option<&str> {
        self.name.namespace.as_deref()
    }

    /// Whether the element has child elements
    pub fn has_child_elements(&self) -> bool {
        self.children.iter().any(|c| c.as_element().is_some())
    }

    /// Iterate over child elements in document order
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// First child element with the given local name, in any namespace
    pub fn child_element(&self, local: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.name.local == local)
    }

    /// First child element with the given namespace URI and local name
    pub fn child_element_ns(&self, namespace: &str, local: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.name.is(namespace, local))
    }

    /// Value of the attribute with the given namespace URI and local name
    pub fn attribute_ns(&self, namespace: &str, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.is(namespace, local))
            .map(|a| a.value.as_str())
    }

    /// Value of the attribute with the given name as written (`prefix:local`)
    pub fn attribute(&self, qualified: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.qualified() == qualified)
            .map(|a| a.value.as_str())
    }

    /// Concatenated text of all descendant text nodes
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Iterate over all descendant elements in document order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(&self.children)
    }
}

/// A parsed XML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: Element,
}

impl XmlDocument {
    /// Wrap a root element
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// The document element
    pub fn root(&self) -> &Element {
        &self.root
    }
}

/// Pre-order iterator over the elements below a node list
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, XmlNode>>,
}

impl<'a> Descendants<'a> {
    /// Walk every element contained in `nodes`
    pub fn new(nodes: &'a [XmlNode]) -> Self {
        Self {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(XmlNode::Element(element)) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                Some(XmlNode::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(prefix: &str, local: &str, ns: &str) -> QName {
        QName {
            prefix: Some(prefix.to_string()),
            local: local.to_string(),
            namespace: Some(ns.to_string()),
        }
    }

    fn sample() -> Element {
        let mut inner = Element::new(QName::local("width"));
        inner.children.push(XmlNode::Text("10".to_string()));

        let mut li = Element::new(named("rdf", "li", "urn:rdf"));
        li.attributes.push(Attribute {
            name: named("img", "format", "urn:img"),
            value: "JPEG".to_string(),
        });
        li.children.push(XmlNode::Text("a".to_string()));
        li.children.push(XmlNode::Element(inner));
        li.children.push(XmlNode::Text("b".to_string()));
        li
    }

    #[test]
    fn test_text_concatenates_descendants() {
        assert_eq!(sample().text(), "a10b");
    }

    #[test]
    fn test_child_lookup() {
        let li = sample();
        assert!(li.has_child_elements());
        assert_eq!(li.child_element("width").map(|e| e.text()), Some("10".to_string()));
        assert!(li.child_element_ns("urn:img", "width").is_none());
        assert!(li.child_element("height").is_none());
    }

    #[test]
    fn test_attribute_lookup() {
        let li = sample();
        assert_eq!(li.attribute_ns("urn:img", "format"), Some("JPEG"));
        assert_eq!(li.attribute("img:format"), Some("JPEG"));
        assert_eq!(li.attribute_ns("urn:other", "format"), None);
    }

    #[test]
    fn test_descendants_preorder() {
        let mut root = Element::new(QName::local("a"));
        let mut b = Element::new(QName::local("b"));
        b.children.push(XmlNode::Element(Element::new(QName::local("c"))));
        root.children.push(XmlNode::Element(b));
        root.children.push(XmlNode::Element(Element::new(QName::local("d"))));

        let doc = XmlDocument::new(root);
        let names: Vec<&str> = doc.root().descendants().map(|e| e.local_name()).collect();
        assert_eq!(names, vec!["b", "c", "d"]);
        assert_eq!(doc.root().local_name(), "a");
    }
}
