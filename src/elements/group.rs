use super::{ToElement, impl_common, lower};
use crate::ast::{Element, Node};
use crate::attributes::AttributeList;

/// A `<g>` grouping its children.
///
/// See: https://developer.mozilla.org/en-US/docs/Web/SVG/Element/g
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    attrs: AttributeList,
    children: Vec<Node>,
}

pub fn group() -> Group {
    Group::default()
}

impl_common!(Group);

impl ToElement for Group {
    fn to_element(&self) -> Element {
        lower("g", AttributeList::new(), &self.attrs, &self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Options, circle, rect, serialize};

    #[test]
    fn test_serialize() {
        let g = group()
            .attr("id", "shapes")
            .children([Node::from(circle(1.0, 1.0, 1.0)), rect(0.0, 0.0, 2.0, 2.0).into()]);
        assert_eq!(
            serialize(&g, &Options::default()).unwrap(),
            r#"<g id="shapes"><circle cx="1" cy="1" r="1"></circle><rect width="2" height="2"></rect></g>"#
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(serialize(&group(), &Options::default()).unwrap(), "<g></g>");
    }
}
