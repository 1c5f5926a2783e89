//! Model a color given as red, green and blue channels.

use crate::component::ComponentValue;

luminant_macros::gen_model! {
    /// A color given as red, green and blue channels between 0 and 255.
    pub struct Rgb {
        /// The red channel of the color.
        red: ComponentValue,
        /// The green channel of the color.
        green: ComponentValue,
        /// The blue channel of the color.
        blue: ComponentValue,
    }
}

impl Rgb {
    /// Return the channels coerced to bytes, if all of them are valid.
    pub fn channels(&self) -> Option<[u8; 3]> {
        Some([
            self.red.as_channel()?,
            self.green.as_channel()?,
            self.blue.as_channel()?,
        ])
    }
}

impl super::ColorType for Rgb {
    fn is_color_type(&self) -> bool {
        self.channels().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColorType, Model};

    #[test]
    fn new_model() {
        let rgb = Rgb::new(24, "62", "ff");
        assert_eq!(rgb.red, ComponentValue::Number(24.0));
        assert_eq!(rgb.green, ComponentValue::Text("62".to_owned()));
        assert!(rgb.opacity.is_none());
        assert!(rgb.is_complete());
        assert_eq!(rgb.channels(), Some([24, 62, 255]));
        assert_eq!(Rgb::NAME, "rgb");
    }

    #[test]
    fn missing_channels() {
        let rgb = Rgb {
            red: 1.into(),
            green: 2.into(),
            ..Default::default()
        };
        assert!(!rgb.is_complete());
        assert!(!rgb.is_color_type());
        assert!(rgb.components()[2].is_none());
    }

    #[test]
    fn opacity_is_carried() {
        let rgb = Rgb::new(1, 2, 3).with_opacity(0.5);
        assert_eq!(rgb.opacity(), &ComponentValue::Number(0.5));
    }
}
