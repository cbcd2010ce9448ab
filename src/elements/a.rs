use super::{ToElement, impl_common, lower};
use crate::ast::{Element, Node};
use crate::attributes::AttributeList;

/// An `<a>` hyperlink around its children.
///
/// See: https://developer.mozilla.org/en-US/docs/Web/SVG/Element/a
#[derive(Debug, Clone, Default, PartialEq)]
pub struct A {
    pub href: String,
    pub target: String,
    pub link_type: String,
    attrs: AttributeList,
    children: Vec<Node>,
}

pub fn a(href: impl Into<String>) -> A {
    A {
        href: href.into(),
        ..A::default()
    }
}

impl A {
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// MIME type of the linked resource, written as `type`.
    pub fn link_type(mut self, link_type: impl Into<String>) -> Self {
        self.link_type = link_type.into();
        self
    }
}

impl_common!(A);

impl ToElement for A {
    fn to_element(&self) -> Element {
        let mut typed = AttributeList::new();
        for (name, value) in [
            ("href", &self.href),
            ("target", &self.target),
            ("type", &self.link_type),
        ] {
            if !value.is_empty() {
                typed.add(name, value.as_str());
            }
        }
        lower("a", typed, &self.attrs, &self.children)
    }
}
