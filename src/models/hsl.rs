//! Model a color with the HSL notation in the sRGB color space.

use crate::{
    color::{Component, Components},
    component::ComponentValue,
};

luminant_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color in degrees.
        hue: ComponentValue,
        /// The saturation component of the color.
        saturation: ComponentValue,
        /// The lightness component of the color.
        lightness: ComponentValue,
    }
}

impl Hsl {
    /// Return the components with the hue normalized to `[0, 360)` and
    /// saturation and lightness as fractions, if all of them are valid.
    pub fn to_components(&self) -> Option<Components> {
        Some(Components(
            self.hue.as_degrees()?,
            self.saturation.as_fraction()?,
            self.lightness.as_fraction()?,
        ))
    }
}

impl From<Components> for Hsl {
    fn from(value: Components) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl super::ColorType for Hsl {
    fn is_color_type(&self) -> bool {
        self.to_components().is_some()
    }
}

/// Format a fraction as a whole percentage, the way HSL values are usually
/// displayed.
pub fn percent(value: Component) -> String {
    format!("{}%", (value * 100.0).round())
}
