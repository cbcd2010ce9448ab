use super::{ToElement, impl_common, lower, push_length, push_opt};
use crate::ast::{Element, Node};
use crate::attributes::AttributeList;
use crate::length::Length;

/// A `<tspan>` inside a [`Text`](super::Text).
///
/// See: https://developer.mozilla.org/en-US/docs/Web/SVG/Element/tspan
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TSpan {
    pub x: Length,
    pub y: Length,
    pub dx: Option<Length>,
    pub dy: Option<Length>,
    pub text: String,
    attrs: AttributeList,
    children: Vec<Node>,
}

pub fn tspan(text: impl Into<String>) -> TSpan {
    TSpan::new(text)
}

impl TSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn x(mut self, x: impl Into<Length>) -> Self {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<Length>) -> Self {
        self.y = y.into();
        self
    }

    pub fn dx(mut self, dx: impl Into<Length>) -> Self {
        self.dx = Some(dx.into());
        self
    }

    pub fn dy(mut self, dy: impl Into<Length>) -> Self {
        self.dy = Some(dy.into());
        self
    }

    pub fn unset_dx(mut self) -> Self {
        self.dx = None;
        self
    }

    pub fn unset_dy(mut self) -> Self {
        self.dy = None;
        self
    }
}

impl_common!(TSpan);

impl ToElement for TSpan {
    fn to_element(&self) -> Element {
        let mut typed = AttributeList::new();
        push_length(&mut typed, "x", &self.x);
        push_length(&mut typed, "y", &self.y);
        push_opt(&mut typed, "dx", self.dx.as_ref());
        push_opt(&mut typed, "dy", self.dy.as_ref());

        let mut elem = lower("tspan", typed, &self.attrs, &self.children);
        if !self.text.is_empty() {
            elem.children.insert(0, Node::Text(self.text.clone()));
        }
        elem
    }
}
