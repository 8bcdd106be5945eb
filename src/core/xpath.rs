//! XPath location paths for XMP queries
//!
//! This module parses and evaluates the subset of XPath the extractors need:
//! - `//rdf:RDF/rdf:Description` - descendant and child steps
//! - `xmpGImg:*`, `*` - wildcard name tests
//! - `rdf:li[2]` - 1-based positional predicate
//!
//! Evaluation is lazy and yields each matching element once.

use crate::core::error::{XmpError, XmpResult};
use crate::core::namespace::PrefixResolver;
use crate::core::node::{Element, XmlDocument, XmlNode};
use std::collections::HashSet;
use std::rc::Rc;

/// Axis connecting a step to the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// `/step`
    Child,
    /// `//step`
    Descendant,
}

/// Name test of a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameTest {
    /// `*`
    Any,
    /// `prefix:*`
    AnyInNamespace(String),
    /// `prefix:local` or `local`
    Name {
        prefix: Option<String>,
        local: String,
    },
}

/// One location step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub axis: Axis,
    pub test: NameTest,
    /// 1-based position among the matching children of each context node
    pub position: Option<usize>,
}

/// A parsed location path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub steps: Vec<Step>,
}

/// Parse a location path
///
/// A path without a leading `/` is evaluated from the document node, the same
/// as an absolute one.
pub fn parse_query(expression: &str) -> XmpResult<Query> {
    let expr = expression.trim();
    if expr.is_empty() {
        return Err(XmpError::BadXPath("Empty path".to_string()));
    }

    let mut steps = Vec::new();
    let mut rest = expr;
    let mut first = true;

    while !rest.is_empty() {
        let axis = if let Some(r) = rest.strip_prefix("//") {
            rest = r;
            Axis::Descendant
        } else if let Some(r) = rest.strip_prefix('/') {
            rest = r;
            Axis::Child
        } else if first {
            Axis::Child
        } else {
            return Err(XmpError::BadXPath(format!("Expected '/' in {}", expr)));
        };
        first = false;

        let end = rest.find('/').unwrap_or(rest.len());
        let token = &rest[..end];
        rest = &rest[end..];

        if token.is_empty() {
            return Err(XmpError::BadXPath(format!("Empty step in {}", expr)));
        }
        steps.push(parse_step(axis, token)?);
    }

    Ok(Query { steps })
}

fn parse_step(axis: Axis, token: &str) -> XmpResult<Step> {
    let (name, position) = match token.find('[') {
        Some(open) => {
            let Some(inner) = token[open + 1..].strip_suffix(']') else {
                return Err(XmpError::BadXPath(format!("Unclosed bracket in {}", token)));
            };
            let index = inner.trim().parse::<usize>().map_err(|_| {
                XmpError::BadXPath(format!("Invalid position: {}", inner))
            })?;
            if index == 0 {
                return Err(XmpError::BadXPath("Positions are 1-based".to_string()));
            }
            (&token[..open], Some(index))
        }
        None => (token, None),
    };

    let test = match name.split_once(':') {
        _ if name == "*" => NameTest::Any,
        Some((prefix, "*")) if is_ncname(prefix) => NameTest::AnyInNamespace(prefix.to_string()),
        Some((prefix, local)) if is_ncname(prefix) && is_ncname(local) => NameTest::Name {
            prefix: Some(prefix.to_string()),
            local: local.to_string(),
        },
        None if is_ncname(name) => NameTest::Name {
            prefix: None,
            local: name.to_string(),
        },
        _ => return Err(XmpError::BadXPath(format!("Invalid name test: {}", name))),
    };

    Ok(Step {
        axis,
        test,
        position,
    })
}

fn is_ncname(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Step with its prefix already resolved to a URI
#[derive(Debug)]
struct ResolvedStep {
    axis: Axis,
    // `None` matches any namespace, `Some("")` nothing, `Some(uri)` that uri
    namespace: Option<String>,
    // `None` matches any local name
    local: Option<String>,
    // unprefixed names only match elements in no namespace
    unprefixed: bool,
    position: Option<usize>,
}

impl ResolvedStep {
    fn new(step: &Step, resolver: &dyn PrefixResolver) -> Self {
        let (namespace, local, unprefixed) = match &step.test {
            NameTest::Any => (None, None, false),
            NameTest::AnyInNamespace(prefix) => {
                (Some(resolver.resolve(prefix).to_string()), None, false)
            }
            NameTest::Name {
                prefix: Some(prefix),
                local,
            } => (
                Some(resolver.resolve(prefix).to_string()),
                Some(local.clone()),
                false,
            ),
            NameTest::Name {
                prefix: None,
                local,
            } => (None, Some(local.clone()), true),
        };
        Self {
            axis: step.axis,
            namespace,
            local,
            unprefixed,
            position: step.position,
        }
    }

    fn matches(&self, element: &Element) -> bool {
        if let Some(local) = &self.local {
            if element.local_name() != local {
                return false;
            }
        }
        if self.unprefixed {
            return element.namespace_uri().is_none();
        }
        match &self.namespace {
            None => true,
            // unknown prefix
            Some(uri) if uri.is_empty() => false,
            Some(uri) => element.namespace_uri() == Some(uri.as_str()),
        }
    }
}

/// A node the next step is evaluated from
#[derive(Clone, Copy)]
enum Context<'a> {
    Document(&'a XmlDocument),
    Element(&'a Element),
}

impl<'a> Context<'a> {
    fn children(self) -> impl Iterator<Item = &'a Element> {
        let (head, nodes): (Option<&'a Element>, &'a [XmlNode]) = match self {
            Context::Document(doc) => (Some(doc.root()), &[][..]),
            Context::Element(element) => (None, element.children.as_slice()),
        };
        head.into_iter()
            .chain(nodes.iter().filter_map(XmlNode::as_element))
    }

    fn descendants_or_self(self) -> impl Iterator<Item = Context<'a>> {
        let (head, below) = match self {
            Context::Document(doc) => (Some(doc.root()), doc.root().descendants()),
            Context::Element(element) => (None, element.descendants()),
        };
        std::iter::once(self).chain(head.into_iter().chain(below).map(Context::Element))
    }
}

type ContextIter<'a> = Box<dyn Iterator<Item = Context<'a>> + 'a>;

/// Lazy iterator over the elements matched by a query
///
/// Each call to [`evaluate`] produces a fresh, independent iterator.
pub struct Matches<'a> {
    inner: Option<ContextIter<'a>>,
    seen: HashSet<*const Element>,
}

impl<'a> Matches<'a> {
    /// An iterator that yields nothing
    pub fn empty() -> Self {
        Self {
            inner: None,
            seen: HashSet::new(),
        }
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let inner = self.inner.as_mut()?;
        for context in inner {
            if let Context::Element(element) = context {
                if self.seen.insert(element as *const Element) {
                    return Some(element);
                }
            }
        }
        None
    }
}

/// Evaluate a parsed query against a document
pub fn evaluate<'a>(
    query: &Query,
    document: &'a XmlDocument,
    resolver: &dyn PrefixResolver,
) -> Matches<'a> {
    let mut current: ContextIter<'a> = Box::new(std::iter::once(Context::Document(document)));

    for step in &query.steps {
        let step = Rc::new(ResolvedStep::new(step, resolver));
        let contexts: ContextIter<'a> = match step.axis {
            Axis::Child => current,
            Axis::Descendant => Box::new(current.flat_map(Context::descendants_or_self)),
        };
        current = Box::new(contexts.flat_map(move |context| {
            let step = Rc::clone(&step);
            let skip = step.position.map_or(0, |p| p - 1);
            let take = step.position.map_or(usize::MAX, |_| 1);
            context
                .children()
                .filter(move |element| step.matches(element))
                .skip(skip)
                .take(take)
                .map(Context::Element)
        }));
    }

    Matches {
        inner: Some(current),
        seen: HashSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::namespace::NamespaceTable;
    use crate::core::parser::parse_document;

    const DOC: &str = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
          xmlns:dc="http://purl.org/dc/elements/1.1/">
  <rdf:Description>
   <dc:subject><rdf:Bag><rdf:li>one</rdf:li><rdf:li>two</rdf:li></rdf:Bag></dc:subject>
  </rdf:Description>
  <rdf:Description>
   <dc:subject><rdf:Bag><rdf:li>three</rdf:li></rdf:Bag></dc:subject>
  </rdf:Description>
 </rdf:RDF>
</x:xmpmeta>"#;

    fn texts(expr: &str) -> Vec<String> {
        let doc = parse_document(DOC).unwrap();
        let table = NamespaceTable::xmp();
        let query = parse_query(expr).unwrap();
        evaluate(&query, &doc, &table).map(|e| e.text()).collect()
    }

    #[test]
    fn test_parse_path() {
        let query = parse_query("//rdf:RDF/rdf:Description[2]").unwrap();
        assert_eq!(query.steps.len(), 2);
        assert_eq!(query.steps[0].axis, Axis::Descendant);
        assert_eq!(
            query.steps[1],
            Step {
                axis: Axis::Child,
                test: NameTest::Name {
                    prefix: Some("rdf".to_string()),
                    local: "Description".to_string(),
                },
                position: Some(2),
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_query("").is_err());
        assert!(parse_query("//").is_err());
        assert!(parse_query("a//").is_err());
        assert!(parse_query("a[0]").is_err());
        assert!(parse_query("a[x]").is_err());
        assert!(parse_query("a[1").is_err());
        assert!(parse_query("a:b:c").is_err());
    }

    #[test]
    fn test_descendant_path_in_document_order() {
        assert_eq!(
            texts("//rdf:RDF/rdf:Description/dc:subject/rdf:Bag/rdf:li"),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn test_position_predicate() {
        assert_eq!(texts("//rdf:Bag/rdf:li[1]"), vec!["one", "three"]);
        assert_eq!(texts("//rdf:Description[2]//rdf:li"), vec!["three"]);
    }

    #[test]
    fn test_child_path_from_document() {
        assert_eq!(texts("/x:xmpmeta").len(), 0);
        assert_eq!(texts("/*/rdf:RDF/rdf:Description").len(), 2);
        assert_eq!(texts("//rdf:*").len(), 8);
    }

    #[test]
    fn test_unknown_prefix_matches_nothing() {
        assert!(texts("//foo:li").is_empty());
    }

    #[test]
    fn test_no_duplicates_for_overlapping_contexts() {
        assert_eq!(texts("//*//rdf:li").len(), 3);
    }

    #[test]
    fn test_fresh_iterators_restart() {
        let doc = parse_document(DOC).unwrap();
        let table = NamespaceTable::xmp();
        let query = parse_query("//rdf:li").unwrap();
        let mut first = evaluate(&query, &doc, &table);
        assert_eq!(first.next().map(|e| e.text()), Some("one".to_string()));
        let second: Vec<_> = evaluate(&query, &doc, &table).collect();
        assert_eq!(second.len(), 3);
    }
}
