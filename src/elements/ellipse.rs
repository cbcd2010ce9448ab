use super::presentation::impl_presentation;
use super::{ToElement, impl_common, lower, push_length};
use crate::ast::{Element, Node};
use crate::attributes::AttributeList;
use crate::elements::Presentation;
use crate::length::Length;

/// An `<ellipse>`.
///
/// See: https://developer.mozilla.org/en-US/docs/Web/SVG/Element/ellipse
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ellipse {
    pub cx: Length,
    pub cy: Length,
    pub rx: Length,
    pub ry: Length,
    presentation: Presentation,
    attrs: AttributeList,
    children: Vec<Node>,
}

pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Ellipse {
    Ellipse::new(Length::new(cx), Length::new(cy), Length::new(rx), Length::new(ry))
}

impl Ellipse {
    pub fn new(cx: Length, cy: Length, rx: Length, ry: Length) -> Self {
        Self {
            cx,
            cy,
            rx,
            ry,
            ..Self::default()
        }
    }
}

impl_common!(Ellipse);
impl_presentation!(Ellipse);

impl ToElement for Ellipse {
    fn to_element(&self) -> Element {
        let mut typed = AttributeList::new();
        push_length(&mut typed, "cx", &self.cx);
        push_length(&mut typed, "cy", &self.cy);
        push_length(&mut typed, "rx", &self.rx);
        push_length(&mut typed, "ry", &self.ry);
        self.presentation.push_attrs(&mut typed);
        lower("ellipse", typed, &self.attrs, &self.children)
    }
}
