use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("Invalid color format: {0}")]
    InvalidFormat(String),

    #[error("Unknown color name: {0}")]
    UnknownColorName(String),

    #[error("Invalid number {input:?}: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Invalid SVG: {0}")]
    InvalidSvg(String),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
