//! Generic SVG/XML tree.
//!
//! Element builders lower themselves into this tree, the serializer walks it,
//! and the reader produces it.

use std::str::FromStr;

use crate::attributes::AttributeList;

/// A qualified name (possibly with namespace prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace prefix (e.g., "svg", "xlink")
    pub prefix: Option<String>,
    /// Local name (e.g., "rect", "href")
    pub local: String,
}

impl QName {
    pub fn new(local: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local: local.into(),
        }
    }

    pub fn with_prefix(prefix: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            local: local.into(),
        }
    }

    /// Parse a qualified name from a string like "prefix:local" or just "local".
    pub fn parse(s: &str) -> Self {
        if let Some((prefix, local)) = s.split_once(':') {
            Self::with_prefix(prefix, local)
        } else {
            Self::new(s)
        }
    }

    /// Compare against a name written as "prefix:local" or "local".
    pub fn is(&self, name: &str) -> bool {
        match &self.prefix {
            Some(prefix) => name.split_once(':') == Some((prefix.as_str(), self.local.as_str())),
            None => self.local == name,
        }
    }

    /// Get the full name as a string.
    pub fn full_name(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{}:{}", p, self.local),
            None => self.local.clone(),
        }
    }
}

/// An attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: QName::parse(&name.into()),
            value: value.into(),
        }
    }
}

/// A node in the SVG tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element node
    Element(Element),
    /// A text node
    Text(String),
    /// A comment node
    Comment(String),
    /// A CDATA section
    CData(String),
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(elem)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An SVG/XML element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element name with optional prefix (e.g., "svg", "svg:rect")
    pub name: QName,
    /// Attributes on this element, in output order
    pub attributes: AttributeList,
    /// Child nodes
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: QName::parse(&name.into()),
            attributes: AttributeList::new(),
            children: Vec::new(),
        }
    }

    /// Get the first attribute value with this name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Parse an attribute into one of the typed values, e.g.
    /// `elem.attr_as::<Length>("cx")`. `None` when the attribute is absent.
    pub fn attr_as<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get_attr(name).map(str::parse::<T>)
    }

    /// Set an attribute value, replacing the first one with the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.set(name, value);
    }

    /// Remove every attribute with this name.
    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.remove_all(name);
    }

    /// Builder form of adding an attribute; duplicates are kept.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.add(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Check if this element has a specific local name.
    pub fn is(&self, name: &str) -> bool {
        self.name.local == name
    }

    /// Concatenated text of the direct text and CDATA children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) | Node::CData(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Iterate over child elements only (skip text, comments, etc.).
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Iterate over child elements mutably.
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }
}
