//! Element builders.
//!
//! Each builder is a plain value. Setters take `self` and hand back the
//! updated value, so a builder can be cloned and the copies changed
//! independently:
//!
//! ```
//! use svgtag::{circle, Color};
//!
//! let base = circle(2.0, 4.0, 6.0).fill(Color::rgb(255, 0, 0));
//! let tagged = base.clone().attr("foo", "Foo").attr("bar", "Bar");
//! assert_eq!(
//!     svgtag::serialize(&tagged, &Default::default()).unwrap(),
//!     r##"<circle cx="2" cy="4" r="6" fill="#ff0000" foo="Foo" bar="Bar"></circle>"##
//! );
//! ```
//!
//! When lowered to an [`Element`], typed attributes come first in declaration
//! order and are left out while they hold their default, then the free-form
//! attributes follow in insertion order.

mod a;
mod circle;
mod desc;
mod ellipse;
mod group;
mod line;
mod presentation;
mod rect;
mod svg;
mod text;
mod tspan;

pub use a::*;
pub use circle::*;
pub use desc::*;
pub use ellipse::*;
pub use group::*;
pub use line::*;
pub use presentation::*;
pub use rect::*;
pub use svg::*;
pub use text::*;
pub use tspan::*;

use crate::ast::{Element, Node};
use crate::attributes::AttributeList;
use crate::length::Length;

/// Anything that can be written out as an [`Element`].
pub trait ToElement {
    fn to_element(&self) -> Element;
}

impl ToElement for Element {
    fn to_element(&self) -> Element {
        self.clone()
    }
}

/// Build a generic element.
///
/// A non-empty `namespace` becomes an `xmlns` attribute ahead of `attrs`, and
/// non-empty `text` becomes the first child.
pub fn element<'a>(
    local: &str,
    namespace: &str,
    text: &str,
    attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    children: impl IntoIterator<Item = Node>,
) -> Element {
    let mut elem = Element::new(local);
    if !namespace.is_empty() {
        elem.attributes.add("xmlns", namespace);
    }
    for (name, value) in attrs {
        elem.attributes.add(name, value);
    }
    if !text.is_empty() {
        elem.children.push(Node::Text(text.to_string()));
    }
    elem.children.extend(children);
    elem
}

/// Add `value` under `name` unless it is zero with no unit.
pub(crate) fn push_length(attrs: &mut AttributeList, name: &str, value: &Length) {
    if !value.is_default() {
        attrs.add(name, value.to_string());
    }
}

pub(crate) fn push_opt<T: ToString>(attrs: &mut AttributeList, name: &str, value: Option<&T>) {
    if let Some(value) = value {
        attrs.add(name, value.to_string());
    }
}

/// Lower a builder: typed attributes, then free-form ones, then children.
pub(crate) fn lower(
    name: &str,
    typed: AttributeList,
    attrs: &AttributeList,
    children: &[Node],
) -> Element {
    let mut elem = Element::new(name);
    elem.attributes = typed;
    elem.attributes.extend(attrs);
    elem.children = children.to_vec();
    elem
}

/// `attr`, `remove_attr`, `child` and `children` for a builder with `attrs`
/// and `children` fields, plus its conversion into a [`Node`].
macro_rules! impl_common {
    ($ty:ident) => {
        impl $ty {
            /// Add a free-form attribute. Existing attributes with the same
            /// name are kept.
            pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.attrs.add(name, value);
                self
            }

            /// Remove every free-form attribute with this name.
            pub fn remove_attr(mut self, name: &str) -> Self {
                self.attrs.remove_all(name);
                self
            }

            pub fn child(mut self, child: impl Into<$crate::ast::Node>) -> Self {
                self.children.push(child.into());
                self
            }

            pub fn children<N: Into<$crate::ast::Node>>(
                mut self,
                children: impl IntoIterator<Item = N>,
            ) -> Self {
                self.children.extend(children.into_iter().map(Into::into));
                self
            }

            pub fn attributes(&self) -> &$crate::attributes::AttributeList {
                &self.attrs
            }
        }

        impl From<$ty> for $crate::ast::Node {
            fn from(value: $ty) -> Self {
                $crate::ast::Node::Element($crate::elements::ToElement::to_element(&value))
            }
        }

        impl From<$ty> for $crate::ast::Element {
            fn from(value: $ty) -> Self {
                $crate::elements::ToElement::to_element(&value)
            }
        }
    };
}

pub(crate) use impl_common;
