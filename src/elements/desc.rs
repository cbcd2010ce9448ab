use super::{ToElement, impl_common, lower};
use crate::ast::{Element, Node};
use crate::attributes::AttributeList;

/// A `<desc>`, a text description of its parent.
///
/// See: https://developer.mozilla.org/en-US/docs/Web/SVG/Element/desc
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Desc {
    pub text: String,
    attrs: AttributeList,
    children: Vec<Node>,
}

pub fn desc(text: impl Into<String>) -> Desc {
    Desc {
        text: text.into(),
        ..Desc::default()
    }
}

impl_common!(Desc);

impl ToElement for Desc {
    fn to_element(&self) -> Element {
        let mut elem = lower("desc", AttributeList::new(), &self.attrs, &self.children);
        if !self.text.is_empty() {
            elem.children.insert(0, Node::Text(self.text.clone()));
        }
        elem
    }
}
