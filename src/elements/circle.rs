use super::presentation::impl_presentation;
use super::{ToElement, impl_common, lower, push_length};
use crate::ast::{Element, Node};
use crate::attributes::AttributeList;
use crate::elements::Presentation;
use crate::length::Length;

/// A `<circle>`.
///
/// See: https://developer.mozilla.org/en-US/docs/Web/SVG/Element/circle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    pub cx: Length,
    pub cy: Length,
    pub r: Length,
    presentation: Presentation,
    attrs: AttributeList,
    children: Vec<Node>,
}

/// A circle from plain user-space numbers.
pub fn circle(cx: f64, cy: f64, r: f64) -> Circle {
    Circle::new(Length::new(cx), Length::new(cy), Length::new(r))
}

impl Circle {
    pub fn new(cx: Length, cy: Length, r: Length) -> Self {
        Self {
            cx,
            cy,
            r,
            ..Self::default()
        }
    }
}

impl_common!(Circle);
impl_presentation!(Circle);

impl ToElement for Circle {
    fn to_element(&self) -> Element {
        let mut typed = AttributeList::new();
        push_length(&mut typed, "cx", &self.cx);
        push_length(&mut typed, "cy", &self.cy);
        push_length(&mut typed, "r", &self.r);
        self.presentation.push_attrs(&mut typed);
        lower("circle", typed, &self.attrs, &self.children)
    }
}
