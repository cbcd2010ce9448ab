use super::{ToElement, impl_common, lower, push_length, push_opt};
use crate::ast::{Element, Node};
use crate::attributes::AttributeList;
use crate::color::Color;
use crate::length::Length;
use crate::text_anchor::TextAnchor;

/// A `<text>` element. Its content goes in as children, either plain strings
/// or [`TSpan`](super::TSpan)s.
///
/// See: https://developer.mozilla.org/en-US/docs/Web/SVG/Element/text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub x: Length,
    pub y: Length,
    pub text_anchor: Option<TextAnchor>,
    pub fill: Option<Color>,
    attrs: AttributeList,
    children: Vec<Node>,
}

pub fn text(x: f64, y: f64) -> Text {
    Text::new(Length::new(x), Length::new(y))
}

impl Text {
    pub fn new(x: Length, y: Length) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn unset_fill(mut self) -> Self {
        self.fill = None;
        self
    }

    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.text_anchor = Some(anchor);
        self
    }

    pub fn unset_text_anchor(mut self) -> Self {
        self.text_anchor = None;
        self
    }
}

impl_common!(Text);

impl ToElement for Text {
    fn to_element(&self) -> Element {
        let mut typed = AttributeList::new();
        push_length(&mut typed, "x", &self.x);
        push_length(&mut typed, "y", &self.y);
        push_opt(&mut typed, "text-anchor", self.text_anchor.as_ref());
        push_opt(&mut typed, "fill", self.fill.as_ref());
        lower("text", typed, &self.attrs, &self.children)
    }
}
