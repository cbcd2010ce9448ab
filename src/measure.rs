//! Numbers with an optional unit suffix.
//!
//! [`Length`](crate::Length) and [`Opacity`](crate::Opacity) are the same
//! thing with different unit sets, so both are a [`Measure`] over a
//! [`UnitSet`].

use std::fmt;
use std::str::FromStr;

use crate::error::SvgError;

/// A closed set of units that can follow a number.
pub trait UnitSet: Copy + PartialEq + Default + fmt::Debug + 'static {
    /// The unit written as a trailing `%`, if the set has one.
    const PERCENT: Option<Self>;

    /// Two-letter unit codes, lowercase.
    const CODES: &'static [(&'static str, Self)];

    /// Text written after the number.
    fn suffix(self) -> &'static str;

    /// Look up a unit by its suffix, ignoring case. Anything unknown, including
    /// the empty string, is the unitless default.
    fn from_suffix(s: &str) -> Self {
        if s == "%" {
            if let Some(percent) = Self::PERCENT {
                return percent;
            }
        }
        Self::from_code(s).unwrap_or_default()
    }

    fn from_code(s: &str) -> Option<Self> {
        Self::CODES
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(s))
            .map(|(_, unit)| *unit)
    }
}

/// A number tagged with a unit from `U`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measure<U> {
    pub number: f64,
    pub unit: U,
}

impl<U: UnitSet> Measure<U> {
    /// A bare number.
    pub fn new(number: f64) -> Self {
        Self::with_unit(number, U::default())
    }

    pub fn with_unit(number: f64, unit: U) -> Self {
        Self { number, unit }
    }

    /// Zero with no unit, which elements leave out of their output.
    pub fn is_default(&self) -> bool {
        self.number == 0.0 && self.unit == U::default()
    }

    /// Parse text like `12`, `50%` or `3.5em`.
    ///
    /// An empty string is zero. A two-letter unit is only looked for when the
    /// input is longer than two bytes, so `1e` is read as a (bad) number rather
    /// than a unit.
    pub fn parse(s: &str) -> Result<Self, SvgError> {
        if s.is_empty() {
            return Ok(Self::default());
        }

        let (number, unit) = split_unit::<U>(s);
        let number = number
            .parse::<f64>()
            .map_err(|source| SvgError::InvalidNumber {
                input: s.to_string(),
                source,
            })?;

        Ok(Self::with_unit(number, unit))
    }
}

fn split_unit<U: UnitSet>(s: &str) -> (&str, U) {
    if let (Some(percent), Some(rest)) = (U::PERCENT, s.strip_suffix('%')) {
        return (rest, percent);
    }

    if s.len() > 2 {
        if let Some((rest, code)) = s.split_at_checked(s.len() - 2) {
            if let Some(unit) = U::from_code(code) {
                return (rest, unit);
            }
        }
    }

    (s, U::default())
}

impl<U: UnitSet> From<f64> for Measure<U> {
    fn from(number: f64) -> Self {
        Self::new(number)
    }
}

impl<U: UnitSet> FromStr for Measure<U> {
    type Err = SvgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<U: UnitSet> fmt::Display for Measure<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.number))?;
        f.write_str(self.unit.suffix())
    }
}

/// Shortest decimal text that reads back as the same `f64`, without a
/// trailing `.0`. Very large and very small magnitudes use exponent form
/// (`1e16`, `1e-7`), which SVG number syntax accepts.
pub fn format_number(n: f64) -> String {
    let mut buf = ryu::Buffer::new();
    let s = buf.format(n);
    s.strip_suffix(".0").unwrap_or(s).to_string()
}
