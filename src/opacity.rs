//! Opacity values, either a bare number or a percentage.

use crate::measure::{Measure, UnitSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpacityUnit {
    #[default]
    None,
    Percent,
}

impl UnitSet for OpacityUnit {
    const PERCENT: Option<Self> = Some(OpacityUnit::Percent);

    const CODES: &'static [(&'static str, Self)] = &[];

    fn suffix(self) -> &'static str {
        match self {
            OpacityUnit::None => "",
            OpacityUnit::Percent => "%",
        }
    }
}

/// An opacity such as `0.5` or `50%`.
pub type Opacity = Measure<OpacityUnit>;
