use crate::attributes::AttributeList;
use crate::color::Color;
use crate::measure::format_number;
use crate::opacity::Opacity;

/// Stroke, fill and opacity attributes shared by the shape elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    pub stroke: Option<Color>,
    pub stroke_width: Option<u8>,
    pub stroke_opacity: Option<Opacity>,
    pub fill: Option<Color>,
    pub fill_opacity: Option<Opacity>,
    /// Always within `0.0..=1.0`
    pub opacity: Option<f64>,
}

impl Presentation {
    pub(crate) fn push_attrs(&self, attrs: &mut AttributeList) {
        super::push_opt(attrs, "stroke", self.stroke.as_ref());
        super::push_opt(attrs, "stroke-width", self.stroke_width.as_ref());
        super::push_opt(attrs, "stroke-opacity", self.stroke_opacity.as_ref());
        super::push_opt(attrs, "fill", self.fill.as_ref());
        super::push_opt(attrs, "fill-opacity", self.fill_opacity.as_ref());
        if let Some(opacity) = self.opacity {
            attrs.add("opacity", format_number(opacity));
        }
    }
}

/// Setters for a builder with a `presentation: Presentation` field.
macro_rules! impl_presentation {
    ($ty:ident) => {
        impl $ty {
            pub fn stroke(mut self, stroke: $crate::Color) -> Self {
                self.presentation.stroke = Some(stroke);
                self
            }

            pub fn unset_stroke(mut self) -> Self {
                self.presentation.stroke = None;
                self
            }

            pub fn stroke_width(mut self, width: u8) -> Self {
                self.presentation.stroke_width = Some(width);
                self
            }

            pub fn unset_stroke_width(mut self) -> Self {
                self.presentation.stroke_width = None;
                self
            }

            pub fn stroke_opacity(mut self, opacity: impl Into<$crate::Opacity>) -> Self {
                self.presentation.stroke_opacity = Some(opacity.into());
                self
            }

            pub fn unset_stroke_opacity(mut self) -> Self {
                self.presentation.stroke_opacity = None;
                self
            }

            pub fn fill(mut self, fill: $crate::Color) -> Self {
                self.presentation.fill = Some(fill);
                self
            }

            pub fn unset_fill(mut self) -> Self {
                self.presentation.fill = None;
                self
            }

            pub fn fill_opacity(mut self, opacity: impl Into<$crate::Opacity>) -> Self {
                self.presentation.fill_opacity = Some(opacity.into());
                self
            }

            pub fn unset_fill_opacity(mut self) -> Self {
                self.presentation.fill_opacity = None;
                self
            }

            /// Element opacity, clamped to `0.0..=1.0`. NaN unsets it.
            pub fn opacity(mut self, opacity: f64) -> Self {
                self.presentation.opacity =
                    (!opacity.is_nan()).then(|| opacity.clamp(0.0, 1.0));
                self
            }

            pub fn unset_opacity(mut self) -> Self {
                self.presentation.opacity = None;
                self
            }

            pub fn presentation(&self) -> &$crate::elements::Presentation {
                &self.presentation
            }
        }
    };
}

pub(crate) use impl_presentation;
