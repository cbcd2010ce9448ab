use super::{ToElement, impl_common, lower, push_length};
use crate::ast::{Element, Node};
use crate::attributes::AttributeList;
use crate::length::Length;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// The `<svg>` root, always in the SVG namespace and marked version 1.1.
///
/// See: https://developer.mozilla.org/en-US/docs/Web/SVG/Element/svg
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Svg {
    pub width: Length,
    pub height: Length,
    attrs: AttributeList,
    children: Vec<Node>,
}

pub fn svg(width: f64, height: f64) -> Svg {
    Svg::new(Length::new(width), Length::new(height))
}

impl Svg {
    pub fn new(width: Length, height: Length) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl_common!(Svg);

impl ToElement for Svg {
    fn to_element(&self) -> Element {
        let mut typed = AttributeList::new();
        typed.add("xmlns", SVG_NAMESPACE);
        push_length(&mut typed, "width", &self.width);
        push_length(&mut typed, "height", &self.height);
        typed.add("version", "1.1");
        lower("svg", typed, &self.attrs, &self.children)
    }
}
