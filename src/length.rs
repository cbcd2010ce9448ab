//! Lengths and coordinates.

use crate::measure::{Measure, UnitSet};

/// Units a [`Length`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    /// A bare user-space number
    #[default]
    None,
    Em,
    Ex,
    Px,
    In,
    Cm,
    Mm,
    Pt,
    Pc,
    Percent,
}

impl UnitSet for LengthUnit {
    const PERCENT: Option<Self> = Some(LengthUnit::Percent);

    const CODES: &'static [(&'static str, Self)] = &[
        ("em", LengthUnit::Em),
        ("ex", LengthUnit::Ex),
        ("px", LengthUnit::Px),
        ("in", LengthUnit::In),
        ("cm", LengthUnit::Cm),
        ("mm", LengthUnit::Mm),
        ("pt", LengthUnit::Pt),
        ("pc", LengthUnit::Pc),
    ];

    fn suffix(self) -> &'static str {
        match self {
            LengthUnit::None => "",
            LengthUnit::Em => "em",
            LengthUnit::Ex => "ex",
            LengthUnit::Px => "px",
            LengthUnit::In => "in",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Percent => "%",
        }
    }
}

/// A length such as `10`, `2.5em` or `50%`.
pub type Length = Measure<LengthUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SvgError;

    #[test]
    fn test_unit_from_suffix() {
        assert_eq!(LengthUnit::from_suffix(""), LengthUnit::None);
        assert_eq!(LengthUnit::from_suffix("ex"), LengthUnit::Ex);
        assert_eq!(LengthUnit::from_suffix("PT"), LengthUnit::Pt);
        assert_eq!(LengthUnit::from_suffix("%"), LengthUnit::Percent);
        assert_eq!(LengthUnit::from_suffix("furlong"), LengthUnit::None);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            Length::new(26.4),
            Length {
                number: 26.4,
                unit: LengthUnit::None
            }
        );
        assert_eq!(Length::with_unit(26.4, LengthUnit::Em).unit, LengthUnit::Em);
        assert_eq!(Length::from(3.0), Length::new(3.0));
    }

    #[test]
    fn test_format() {
        assert_eq!(Length::new(65.23).to_string(), "65.23");
        assert_eq!(Length::with_unit(26.4, LengthUnit::Em).to_string(), "26.4em");
        assert_eq!(
            Length::with_unit(-17.2321, LengthUnit::Percent).to_string(),
            "-17.2321%"
        );
        assert_eq!(Length::with_unit(30.0, LengthUnit::Em).to_string(), "30em");
        assert_eq!(Length::with_unit(4.0, LengthUnit::Mm).to_string(), "4mm");
        assert_eq!(Length::default().to_string(), "0");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Length::parse("").unwrap(), Length::default());
        assert_eq!(Length::parse("65.23").unwrap(), Length::new(65.23));
        assert_eq!(
            Length::parse("25em").unwrap(),
            Length::with_unit(25.0, LengthUnit::Em)
        );
        assert_eq!(
            Length::parse("3.33EM").unwrap(),
            Length::with_unit(3.33, LengthUnit::Em)
        );
        assert_eq!(
            Length::parse("50.5%").unwrap(),
            Length::with_unit(50.5, LengthUnit::Percent)
        );
        assert_eq!(
            Length::parse("-1px").unwrap(),
            Length::with_unit(-1.0, LengthUnit::Px)
        );
    }

    #[test]
    fn test_parse_overwrites_previous_value() {
        let mut l = Length::with_unit(25.0, LengthUnit::Em);
        assert_eq!(l.to_string(), "25em");
        l = "65.23".parse().unwrap();
        assert_eq!(l, Length::new(65.23));
    }

    #[test]
    fn test_parse_short_input_has_no_unit() {
        // Two characters or fewer never carry a two-letter unit.
        assert!(matches!(
            Length::parse("1e"),
            Err(SvgError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Length::parse("em"),
            Err(SvgError::InvalidNumber { .. })
        ));
        assert_eq!(Length::parse("12").unwrap(), Length::new(12.0));
        assert_eq!(Length::parse("1%").unwrap(), Length::with_unit(1.0, LengthUnit::Percent));
    }

    #[test]
    fn test_parse_invalid() {
        for s in ["abc", "12furlongs", "%", "px5", "1.2.3"] {
            assert!(
                matches!(Length::parse(s), Err(SvgError::InvalidNumber { .. })),
                "{s:?} should not parse"
            );
        }
    }

    #[test]
    fn test_is_default() {
        assert!(Length::default().is_default());
        assert!(!Length::new(1.0).is_default());
        assert!(!Length::with_unit(0.0, LengthUnit::Em).is_default());
    }
}
