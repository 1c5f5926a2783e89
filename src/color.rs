//! A [`Color`] represents one sRGB color with opacity, specified as a
//! hexadecimal string, as red, green and blue channels or as hue, saturation
//! and lightness.

use bitflags::bitflags;

use crate::{
    component::ComponentValue,
    convert,
    models::{ColorType, Hsl, Model, Rgb},
};

/// A 64-bit floating point value that all fractional components are
/// computed in.
pub type Component = f64;

/// Represent three components of a color, either red, green and blue or hue,
/// saturation and lightness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Flags to mark any missing components on a [`Color`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the red channel is missing.
        const RED_IS_NONE = 1 << 0;
        /// Set when the green channel is missing.
        const GREEN_IS_NONE = 1 << 1;
        /// Set when the blue channel is missing.
        const BLUE_IS_NONE = 1 << 2;
        /// Set when no hue is waiting to complete the HSL components.
        const HUE_IS_NONE = 1 << 3;
        /// Set when no saturation is waiting to complete the HSL components.
        const SATURATION_IS_NONE = 1 << 4;
        /// Set when no lightness is waiting to complete the HSL components.
        const LIGHTNESS_IS_NONE = 1 << 5;
        /// Set when the opacity was never assigned.
        const OPACITY_IS_NONE = 1 << 6;

        /// Any of the RGB channels is missing.
        const RGB_IS_NONE = Self::RED_IS_NONE.bits()
            | Self::GREEN_IS_NONE.bits()
            | Self::BLUE_IS_NONE.bits();
        /// Any of the pending HSL components is missing.
        const HSL_IS_NONE = Self::HUE_IS_NONE.bits()
            | Self::SATURATION_IS_NONE.bits()
            | Self::LIGHTNESS_IS_NONE.bits();
    }
}

type Setter = for<'a> fn(&'a mut Color, ComponentValue) -> &'a mut Color;

/// A single sRGB color with opacity.
///
/// Red, green, blue and opacity are the stored truth. Hue, saturation and
/// lightness are computed from them on every read, and the HSL setters
/// convert back to RGB immediately. HSL components assigned before all
/// three channels are known are kept as a draft until the HSL triple is
/// complete.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    opacity: Component,
    draft: Components,
    flags: Flags,
    name: Option<String>,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            red: 0,
            green: 0,
            blue: 0,
            opacity: 1.0,
            draft: Components(0.0, 0.0, 0.0),
            flags: Flags::all(),
            name: None,
        }
    }
}

impl Color {
    /// Create a new [`Color`] with every component missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new fully opaque [`Color`] from red, green and blue channels.
    /// ```rust
    /// use luminant::Color;
    /// let c = Color::rgb(24, 98, 118);
    /// assert_eq!(c.hcolor().as_deref(), Some("#186276"));
    /// ```
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        let mut color = Self::default();
        color.store_rgb(red, green, blue);
        color
    }

    /// Return the flags marking missing components.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns true when all three channels are known.
    pub fn is_set(&self) -> bool {
        !self.flags.intersects(Flags::RGB_IS_NONE)
    }

    /// Return the red channel.
    pub fn red(&self) -> Option<u8> {
        (!self.flags.contains(Flags::RED_IS_NONE)).then_some(self.red)
    }

    /// Return the green channel.
    pub fn green(&self) -> Option<u8> {
        (!self.flags.contains(Flags::GREEN_IS_NONE)).then_some(self.green)
    }

    /// Return the blue channel.
    pub fn blue(&self) -> Option<u8> {
        (!self.flags.contains(Flags::BLUE_IS_NONE)).then_some(self.blue)
    }

    /// Return all three channels, only if all of them are set.
    pub fn channels(&self) -> Option<[u8; 3]> {
        self.is_set().then_some([self.red, self.green, self.blue])
    }

    /// Return the hue, saturation and lightness of the color.
    pub fn hsl(&self) -> Option<Components> {
        let [red, green, blue] = self.channels()?;
        Some(convert::rgb_to_hsl(
            &Components(red as Component, green as Component, blue as Component)
                .map(|c| c / 255.0),
        ))
    }

    /// Return the hue in degrees, in the range `[0, 360)`. Colors without
    /// chroma have a hue of 0.
    pub fn hue(&self) -> Option<Component> {
        match self.hsl() {
            Some(hsl) => Some(hsl.0),
            None => (!self.flags.contains(Flags::HUE_IS_NONE)).then_some(self.draft.0),
        }
    }

    /// Return the saturation as a fraction between 0 and 1.
    pub fn saturation(&self) -> Option<Component> {
        match self.hsl() {
            Some(hsl) => Some(hsl.1),
            None => (!self.flags.contains(Flags::SATURATION_IS_NONE)).then_some(self.draft.1),
        }
    }

    /// Return the lightness as a fraction between 0 and 1.
    pub fn lightness(&self) -> Option<Component> {
        match self.hsl() {
            Some(hsl) => Some(hsl.2),
            None => (!self.flags.contains(Flags::LIGHTNESS_IS_NONE)).then_some(self.draft.2),
        }
    }

    /// Return the opacity rounded to two decimals. A color with no opacity
    /// is fully opaque.
    pub fn opacity(&self) -> Component {
        if self.flags.contains(Flags::OPACITY_IS_NONE) {
            1.0
        } else {
            crate::math::round_to(self.opacity, 2)
        }
    }

    /// Return the color as a hexadecimal string: `#rrggbb` when
    /// [`Color::opacity`] reads as 1 and `#rrggbbaa` otherwise.
    pub fn hcolor(&self) -> Option<String> {
        let [red, green, blue] = self.channels()?;
        let alpha = self.alpha_byte();

        Some(if self.opacity() >= 1.0 {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            format!("#{red:02x}{green:02x}{blue:02x}{alpha:02x}")
        })
    }

    /// Return the display name of the color. Unless a name was assigned this
    /// is the hexadecimal string without the leading `#`.
    pub fn name(&self) -> Option<String> {
        self.name.clone().or_else(|| {
            self.hcolor()
                .map(|hcolor| hcolor.trim_start_matches('#').to_owned())
        })
    }

    /// Set the red channel. Values that are not a valid channel are ignored.
    pub fn set_red(&mut self, value: impl Into<ComponentValue>) -> &mut Self {
        if let Some(red) = self.coerce_channel(value.into(), "red") {
            self.red = red;
            self.flags.remove(Flags::RED_IS_NONE);
            self.sync_rgb();
        }
        self
    }

    /// Set the green channel. Values that are not a valid channel are
    /// ignored.
    pub fn set_green(&mut self, value: impl Into<ComponentValue>) -> &mut Self {
        if let Some(green) = self.coerce_channel(value.into(), "green") {
            self.green = green;
            self.flags.remove(Flags::GREEN_IS_NONE);
            self.sync_rgb();
        }
        self
    }

    /// Set the blue channel. Values that are not a valid channel are ignored.
    pub fn set_blue(&mut self, value: impl Into<ComponentValue>) -> &mut Self {
        if let Some(blue) = self.coerce_channel(value.into(), "blue") {
            self.blue = blue;
            self.flags.remove(Flags::BLUE_IS_NONE);
            self.sync_rgb();
        }
        self
    }

    /// Set the hue in degrees. The value wraps around to `[0, 360)`.
    pub fn set_hue(&mut self, value: impl Into<ComponentValue>) -> &mut Self {
        match value.into().as_degrees() {
            Some(hue) => self.update_hsl(|hsl| hsl.0 = hue, Flags::HUE_IS_NONE),
            None => log::debug!("ignoring invalid hue"),
        }
        self
    }

    /// Set the saturation as a fraction, a percentage string or a hexadecimal
    /// byte.
    pub fn set_saturation(&mut self, value: impl Into<ComponentValue>) -> &mut Self {
        match value.into().as_fraction() {
            Some(saturation) => {
                self.update_hsl(|hsl| hsl.1 = saturation, Flags::SATURATION_IS_NONE)
            }
            None => log::debug!("ignoring invalid saturation"),
        }
        self
    }

    /// Set the lightness as a fraction, a percentage string or a hexadecimal
    /// byte.
    pub fn set_lightness(&mut self, value: impl Into<ComponentValue>) -> &mut Self {
        match value.into().as_fraction() {
            Some(lightness) => {
                self.update_hsl(|hsl| hsl.2 = lightness, Flags::LIGHTNESS_IS_NONE)
            }
            None => log::debug!("ignoring invalid lightness"),
        }
        self
    }

    /// Set the opacity as a fraction, a percentage string or a hexadecimal
    /// byte.
    pub fn set_opacity(&mut self, value: impl Into<ComponentValue>) -> &mut Self {
        match value.into().as_fraction() {
            Some(opacity) => {
                self.opacity = opacity;
                self.flags.remove(Flags::OPACITY_IS_NONE);
            }
            None => log::debug!("ignoring invalid opacity"),
        }
        self
    }

    /// Replace the channels and opacity from a hexadecimal string of 3, 4, 6
    /// or 8 digits. Invalid strings are ignored.
    pub fn set_hcolor(&mut self, hcolor: &str) -> &mut Self {
        match crate::parse::parse_hex(hcolor) {
            Ok(hex) => {
                self.store_rgb(hex.red, hex.green, hex.blue);
                match hex.opacity {
                    Some(opacity) => {
                        self.opacity = opacity;
                        self.flags.remove(Flags::OPACITY_IS_NONE);
                    }
                    None => {
                        self.opacity = 1.0;
                        self.flags.insert(Flags::OPACITY_IS_NONE);
                    }
                }
            }
            Err(err) => log::debug!("ignoring hcolor {hcolor:?}: {err}"),
        }
        self
    }

    /// Set the display name of the color.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if !name.is_empty() {
            self.name = Some(name);
        }
        self
    }

    /// Return this color with the given display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// Returns true if the value is something a color can be created from.
    pub fn is_color_type<T: ColorType + ?Sized>(value: &T) -> bool {
        value.is_color_type()
    }

    /// Overwrite all three channels and drop any pending HSL components.
    pub(crate) fn store_rgb(&mut self, red: u8, green: u8, blue: u8) {
        self.red = red;
        self.green = green;
        self.blue = blue;
        self.flags.remove(Flags::RGB_IS_NONE);
        self.clear_draft();
    }

    /// The opacity as a byte, as written in the last hexadecimal pair.
    fn alpha_byte(&self) -> u8 {
        if self.flags.contains(Flags::OPACITY_IS_NONE) {
            u8::MAX
        } else {
            (self.opacity.clamp(0.0, 1.0) * 255.0).round() as u8
        }
    }

    fn coerce_channel(&self, value: ComponentValue, channel: &str) -> Option<u8> {
        let coerced = value.as_channel();
        if coerced.is_none() {
            log::debug!("ignoring invalid {channel} channel {value:?}");
        }
        coerced
    }

    /// Once the last channel arrives the RGB side wins over any draft.
    fn sync_rgb(&mut self) {
        if self.is_set() {
            self.clear_draft();
        }
    }

    fn clear_draft(&mut self) {
        self.draft = Components(0.0, 0.0, 0.0);
        self.flags.insert(Flags::HSL_IS_NONE);
    }

    /// Apply a change to the HSL view and write the result back to RGB. While
    /// RGB is incomplete the change lands in the draft and is converted once
    /// all three HSL components are present.
    fn update_hsl(&mut self, update: impl FnOnce(&mut Components), flag: Flags) {
        if let Some(mut hsl) = self.hsl() {
            update(&mut hsl);
            self.store_hsl(&hsl);
            return;
        }

        update(&mut self.draft);
        self.flags.remove(flag);

        if !self.flags.intersects(Flags::HSL_IS_NONE) {
            let draft = self.draft;
            self.store_hsl(&draft);
        }
    }

    fn store_hsl(&mut self, hsl: &Components) {
        let Components(red, green, blue) =
            convert::hsl_to_rgb(hsl).map(|c| (c * 255.0).round().clamp(0.0, 255.0));
        self.store_rgb(red as u8, green as u8, blue as u8);
    }

    /// Apply an RGB-like or HSL-like model on top of this color.
    fn apply_model<M: Model>(&mut self, model: &M, setters: [Setter; 3]) {
        for (component, set) in model.components().into_iter().zip(setters) {
            if !component.is_none() {
                set(self, component.clone());
            }
        }
        if !model.opacity().is_none() {
            self.set_opacity(model.opacity().clone());
        }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::from(&value)
    }
}

impl From<&Rgb> for Color {
    fn from(value: &Rgb) -> Self {
        let mut color = Color::default();
        color.apply_model(value, [Color::set_red, Color::set_green, Color::set_blue]);
        color
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Self::from(&value)
    }
}

impl From<&Hsl> for Color {
    fn from(value: &Hsl) -> Self {
        let mut color = Color::default();
        color.apply_model(
            value,
            [Color::set_hue, Color::set_saturation, Color::set_lightness],
        );
        color
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        value.parse().unwrap_or_else(|err| {
            log::debug!("creating an unset color from {value:?}: {err}");
            Color::default()
        })
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.hcolor() {
            Some(hcolor) => f.write_str(&hcolor),
            None => Ok(()),
        }
    }
}
