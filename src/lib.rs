//! svgtag - chainable SVG element builders
//!
//! Build SVG elements out of typed attribute values ([`Length`], [`Opacity`],
//! [`Color`], [`TextAnchor`]) plus free-form attributes, and write them out as
//! SVG markup.
//!
//! ```
//! use svgtag::{Color, Options, TextAnchor, circle, svg, text};
//!
//! let doc = svg(120.0, 40.0)
//!     .child(circle(20.0, 20.0, 10.0).fill("crimson".parse::<Color>()?))
//!     .child(text(60.0, 25.0).text_anchor(TextAnchor::Middle).child("hi"));
//!
//! let out = svgtag::serialize(&doc, &Options::default())?;
//! assert!(out.contains(r##"<circle cx="20" cy="20" r="10" fill="#dc143c"></circle>"##));
//! # Ok::<(), svgtag::SvgError>(())
//! ```

mod ast;
mod attributes;
mod color;
pub mod color_names;
mod elements;
mod error;
mod length;
mod measure;
mod normalize;
mod opacity;
mod parse;
mod serialize;
mod text_anchor;

pub use ast::*;
pub use attributes::*;
pub use color::*;
pub use elements::*;
pub use error::*;
pub use length::*;
pub use measure::*;
pub use normalize::*;
pub use opacity::*;
pub use parse::*;
pub use serialize::*;
pub use text_anchor::*;

/// Parse, normalize and re-serialize an SVG string.
pub fn normalize_svg(svg: &str, options: &Options) -> Result<String, SvgError> {
    let mut root = parse_element(svg)?;
    normalize(&mut root);
    serialize(&root, options)
}

/// Serialization options.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Write `<?xml version="1.0" encoding="UTF-8"?>` first
    pub xml_declaration: bool,
    /// Indent nested elements by this many spaces
    pub indent: Option<usize>,
    /// Write childless elements as `<x/>` instead of `<x></x>`
    pub self_close_empty: bool,
}
