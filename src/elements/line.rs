use super::presentation::impl_presentation;
use super::{ToElement, impl_common, lower, push_length};
use crate::ast::{Element, Node};
use crate::attributes::AttributeList;
use crate::elements::Presentation;
use crate::length::Length;

/// A `<line>` from (x1, y1) to (x2, y2).
///
/// See: https://developer.mozilla.org/en-US/docs/Web/SVG/Element/line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub x1: Length,
    pub y1: Length,
    pub x2: Length,
    pub y2: Length,
    presentation: Presentation,
    attrs: AttributeList,
    children: Vec<Node>,
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new(Length::new(x1), Length::new(y1), Length::new(x2), Length::new(y2))
}

impl Line {
    pub fn new(x1: Length, y1: Length, x2: Length, y2: Length) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            ..Self::default()
        }
    }
}

impl_common!(Line);
impl_presentation!(Line);

impl ToElement for Line {
    fn to_element(&self) -> Element {
        let mut typed = AttributeList::new();
        push_length(&mut typed, "x1", &self.x1);
        push_length(&mut typed, "y1", &self.y1);
        push_length(&mut typed, "x2", &self.x2);
        push_length(&mut typed, "y2", &self.y2);
        self.presentation.push_attrs(&mut typed);
        lower("line", typed, &self.attrs, &self.children)
    }
}
