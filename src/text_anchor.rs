use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Read an anchor, ignoring case. Anything that is not `middle` or `end`
    /// is `Start`.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("middle") {
            TextAnchor::Middle
        } else if s.eq_ignore_ascii_case("end") {
            TextAnchor::End
        } else {
            TextAnchor::Start
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

impl FromStr for TextAnchor {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(TextAnchor::parse("middle"), TextAnchor::Middle);
        assert_eq!(TextAnchor::parse("MIDDLE"), TextAnchor::Middle);
        assert_eq!(TextAnchor::parse("End"), TextAnchor::End);
        assert_eq!(TextAnchor::parse("start"), TextAnchor::Start);
    }

    #[test]
    fn test_parse_falls_back_to_start() {
        assert_eq!(TextAnchor::parse("garbage"), TextAnchor::Start);
        assert_eq!(TextAnchor::parse(""), TextAnchor::Start);
        assert_eq!(TextAnchor::parse(" middle"), TextAnchor::Start);
        assert_eq!("whatever".parse::<TextAnchor>(), Ok(TextAnchor::Start));
    }

    #[test]
    fn test_format() {
        assert_eq!(TextAnchor::Start.to_string(), "start");
        assert_eq!(TextAnchor::Middle.to_string(), "middle");
        assert_eq!(TextAnchor::End.to_string(), "end");
    }
}
