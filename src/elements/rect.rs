use super::presentation::impl_presentation;
use super::{ToElement, impl_common, lower, push_length};
use crate::ast::{Element, Node};
use crate::attributes::AttributeList;
use crate::elements::Presentation;
use crate::length::Length;

/// A `<rect>`, optionally with rounded corners.
///
/// See: https://developer.mozilla.org/en-US/docs/Web/SVG/Element/rect
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
    pub rx: Length,
    pub ry: Length,
    presentation: Presentation,
    attrs: AttributeList,
    children: Vec<Node>,
}

/// A square-cornered rect from plain user-space numbers.
pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(
        Length::new(x),
        Length::new(y),
        Length::new(width),
        Length::new(height),
        Length::default(),
        Length::default(),
    )
}

impl Rect {
    pub fn new(x: Length, y: Length, width: Length, height: Length, rx: Length, ry: Length) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx,
            ry,
            ..Self::default()
        }
    }

    /// Corner radii.
    pub fn radius(mut self, rx: impl Into<Length>, ry: impl Into<Length>) -> Self {
        self.rx = rx.into();
        self.ry = ry.into();
        self
    }
}

impl_common!(Rect);
impl_presentation!(Rect);

impl ToElement for Rect {
    fn to_element(&self) -> Element {
        let mut typed = AttributeList::new();
        push_length(&mut typed, "x", &self.x);
        push_length(&mut typed, "y", &self.y);
        push_length(&mut typed, "width", &self.width);
        push_length(&mut typed, "height", &self.height);
        push_length(&mut typed, "rx", &self.rx);
        push_length(&mut typed, "ry", &self.ry);
        self.presentation.push_attrs(&mut typed);
        lower("rect", typed, &self.attrs, &self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, LengthUnit, Options, serialize};

    #[test]
    fn test_serialize_simple() {
        let out = serialize(&rect(0.0, 0.0, 100.0, 50.0), &Options::default()).unwrap();
        assert_eq!(out, r#"<rect width="100" height="50"></rect>"#);
    }

    #[test]
    fn test_serialize_rounded() {
        let r = rect(10.0, 20.0, 30.0, 40.0)
            .radius(Length::with_unit(1.0, LengthUnit::Em), 2.0)
            .fill(Color::rgb(0, 128, 0))
            .attr("id", "r1");
        let out = serialize(&r, &Options::default()).unwrap();
        assert_eq!(
            out,
            r##"<rect x="10" y="20" width="30" height="40" rx="1em" ry="2" fill="#008000" id="r1"></rect>"##
        );
    }
}
