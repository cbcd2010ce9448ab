//! Rewrite known attributes into the canonical form of their value type.

use tracing::debug;

use crate::ast::*;
use crate::color::Color;
use crate::length::Length;
use crate::opacity::Opacity;
use crate::text_anchor::TextAnchor;

const COLOR_ATTRS: &[&str] = &[
    "fill",
    "stroke",
    "stop-color",
    "flood-color",
    "lighting-color",
    "color",
];

const LENGTH_ATTRS: &[&str] = &[
    "x", "y", "cx", "cy", "r", "rx", "ry", "width", "height", "x1", "y1", "x2", "y2", "dx", "dy",
];

const OPACITY_ATTRS: &[&str] = &["opacity", "fill-opacity", "stroke-opacity"];

/// Normalize attribute values on `elem` and everything below it.
///
/// `fill="red"` becomes `fill="#ff0000"`, `r="2EM"` becomes `r="2em"`, and so
/// on. Values that do not parse, like `fill="url(#g)"` or `fill="none"`, are
/// left as they are.
pub fn normalize(elem: &mut Element) {
    for attr in elem.attributes.iter_mut() {
        if attr.name.prefix.is_some() {
            continue;
        }

        if let Some(value) = normalize_value(&attr.name.local, &attr.value) {
            attr.value = value;
        }
    }

    for child in elem.child_elements_mut() {
        normalize(child);
    }
}

fn normalize_value(name: &str, value: &str) -> Option<String> {
    let normalized = if COLOR_ATTRS.contains(&name) {
        value.parse::<Color>().map(|c| c.to_string()).ok()
    } else if LENGTH_ATTRS.contains(&name) {
        value
            .parse::<Length>()
            .ok()
            .filter(|l| l.number.is_finite())
            .map(|l| l.to_string())
    } else if OPACITY_ATTRS.contains(&name) {
        value
            .parse::<Opacity>()
            .ok()
            .filter(|o| o.number.is_finite())
            .map(|o| o.to_string())
    } else if name == "text-anchor" {
        // Only the three keywords; `inherit` and friends keep their meaning.
        ["start", "middle", "end"]
            .iter()
            .any(|k| k.eq_ignore_ascii_case(value))
            .then(|| TextAnchor::parse(value).to_string())
    } else {
        return None;
    };

    if normalized.is_none() {
        debug!(attr = name, value, "leaving value that does not parse");
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_element;

    #[test]
    fn test_normalize_value() {
        assert_eq!(normalize_value("fill", "red").as_deref(), Some("#ff0000"));
        assert_eq!(normalize_value("stroke", "#ABC").as_deref(), Some("#aabbcc"));
        assert_eq!(normalize_value("r", "2EM").as_deref(), Some("2em"));
        assert_eq!(normalize_value("width", "100.50").as_deref(), Some("100.5"));
        assert_eq!(normalize_value("opacity", "50.0%").as_deref(), Some("50%"));
        assert_eq!(normalize_value("text-anchor", "END").as_deref(), Some("end"));
        assert_eq!(normalize_value("text-anchor", "Start").as_deref(), Some("start"));
    }

    #[test]
    fn test_normalize_keeps_other_text_anchor_values() {
        assert_eq!(normalize_value("text-anchor", "inherit"), None);
        assert_eq!(normalize_value("text-anchor", ""), None);

        let mut root =
            parse_element(r#"<g text-anchor="middle"><text text-anchor="inherit">x</text></g>"#)
                .unwrap();
        normalize(&mut root);
        let text = root.child_elements().next().unwrap();
        assert_eq!(text.get_attr("text-anchor"), Some("inherit"));
    }

    #[test]
    fn test_normalize_keeps_non_finite_numbers() {
        assert_eq!(normalize_value("x", "nan"), None);
        assert_eq!(normalize_value("width", "Infinity"), None);
        assert_eq!(normalize_value("r", "-infpx"), None);
        assert_eq!(normalize_value("opacity", "NaN%"), None);

        let mut root = parse_element(r#"<rect x="nan" width="Infinity" fill="Red"/>"#).unwrap();
        normalize(&mut root);
        assert_eq!(root.get_attr("x"), Some("nan"));
        assert_eq!(root.get_attr("width"), Some("Infinity"));
        assert_eq!(root.get_attr("fill"), Some("Red"));
    }

    #[test]
    fn test_normalize_leaves_unparseable_values() {
        assert_eq!(normalize_value("fill", "none"), None);
        assert_eq!(normalize_value("fill", "url(#g)"), None);
        assert_eq!(normalize_value("width", "auto"), None);
        assert_eq!(normalize_value("id", "red"), None);
    }

    #[test]
    fn test_normalize_tree() {
        let mut root = parse_element(
            r#"<svg width="100.0"><g fill="navy"><circle r="5PX" fill="none" xlink:href="red"/></g></svg>"#,
        )
        .unwrap();
        normalize(&mut root);

        assert_eq!(root.get_attr("width"), Some("100"));
        let g = root.child_elements().next().unwrap();
        assert_eq!(g.get_attr("fill"), Some("#000080"));
        let c = g.child_elements().next().unwrap();
        assert_eq!(c.get_attr("r"), Some("5px"));
        assert_eq!(c.get_attr("fill"), Some("none"));
        assert_eq!(c.get_attr("xlink:href"), Some("red"));
    }
}
