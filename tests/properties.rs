//! Property tests for the text forms of the attribute value types.

use proptest::prelude::*;
use svgtag::{Color, Length, LengthUnit, Opacity, OpacityUnit, UnitSet, color_names};

const LENGTH_UNITS: [LengthUnit; 10] = [
    LengthUnit::None,
    LengthUnit::Em,
    LengthUnit::Ex,
    LengthUnit::Px,
    LengthUnit::In,
    LengthUnit::Cm,
    LengthUnit::Mm,
    LengthUnit::Pt,
    LengthUnit::Pc,
    LengthUnit::Percent,
];

/// Property: formatting a parsed 6-digit hex color gives it back in lowercase
#[test]
fn proptest_hex_round_trip() {
    proptest!(|(s in "#[0-9a-fA-F]{6}")| {
        let c: Color = s.parse().unwrap();
        prop_assert_eq!(c.to_string(), s.to_lowercase());
    });
}

/// Property: alpha is always 255 after a trip through text
#[test]
fn proptest_alpha_is_normalized() {
    proptest!(|(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), alpha in any::<u8>())| {
        let back: Color = Color::rgba(r, g, b, alpha).to_string().parse().unwrap();
        prop_assert_eq!(back, Color::rgba(r, g, b, 255));
    });
}

/// Property: a color keyword parses to the same color as its hex value
#[test]
fn test_names_agree_with_hex() {
    for name in color_names::names() {
        let hex = color_names::resolve(name).unwrap();
        assert_eq!(
            name.parse::<Color>().unwrap(),
            Color::from_hex(&format!("#{hex}")).unwrap(),
            "{name}"
        );
    }
}

/// Property: formatting then parsing a length gives the same length
#[test]
fn proptest_length_round_trip() {
    proptest!(|(n in -1.0e9f64..1.0e9, unit in prop::sample::select(LENGTH_UNITS.to_vec()))| {
        let l = Length::with_unit(n, unit);
        let back: Length = l.to_string().parse().unwrap();
        prop_assert_eq!(back, l);
    });
}

/// Property: unit suffixes are read regardless of case
#[test]
fn proptest_length_unit_case() {
    proptest!(|(n in 0u32..100_000, unit in prop::sample::select(LENGTH_UNITS.to_vec()))| {
        let text = format!("{n}{}", unit.suffix().to_uppercase());
        let l: Length = text.parse().unwrap();
        prop_assert_eq!(l, Length::with_unit(n as f64, unit));
    });
}

/// Property: opacity survives a trip through text
#[test]
fn proptest_opacity_round_trip() {
    proptest!(|(n in 0.0f64..100.0, percent in any::<bool>())| {
        let unit = if percent { OpacityUnit::Percent } else { OpacityUnit::None };
        let o = Opacity::with_unit(n, unit);
        let back: Opacity = o.to_string().parse().unwrap();
        prop_assert_eq!(back, o);
    });
}

/// Property: parsing arbitrary text never panics
#[test]
fn proptest_parse_no_panic() {
    proptest!(|(s in ".{0,12}")| {
        let _ = s.parse::<Color>();
        let _ = s.parse::<Length>();
        let _ = s.parse::<Opacity>();
    });
}
