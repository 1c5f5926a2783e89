//! Input models for the notations a [`Color`] can be created from.
//!
//! The models are loosely typed: every component is a [`ComponentValue`] so
//! that numbers, percentage strings and hexadecimal strings can be passed
//! as they arrive. Conversion to a [`Color`] coerces them.

use crate::{color::Color, component::ComponentValue};

pub mod hsl;
pub mod rgb;

pub use hsl::Hsl;
pub use rgb::Rgb;

/// A trait implemented for the input models generated by `gen_model!`.
pub trait Model {
    /// Short lower case name of the notation.
    const NAME: &'static str;

    /// The three components of the model in notation order.
    fn components(&self) -> [&ComponentValue; 3];

    /// The opacity of the model.
    fn opacity(&self) -> &ComponentValue;
}

/// Classifies values a [`Color`] can be created from.
pub trait ColorType {
    /// Returns true if the value is a valid hexadecimal (or CSS functional)
    /// color string, an RGB-like value with all three channels, an HSL-like
    /// value with all three components or a color with all channels set.
    fn is_color_type(&self) -> bool;
}

impl ColorType for str {
    fn is_color_type(&self) -> bool {
        self.parse::<Color>().is_ok()
    }
}

impl ColorType for String {
    fn is_color_type(&self) -> bool {
        self.as_str().is_color_type()
    }
}

impl ColorType for Color {
    fn is_color_type(&self) -> bool {
        self.is_set()
    }
}

impl<T: ColorType + ?Sized> ColorType for &T {
    fn is_color_type(&self) -> bool {
        (**self).is_color_type()
    }
}
